//! Frequency table command
//!
//! Scores every word of a word list asset and writes the frequency table asset.

use super::{Summary, read_asset};
use crate::asset::{
    FREQUENCY_TABLE_NAME, WORD_LIST_NAME, parse_string_list, render_score_table, write_atomic,
};
use crate::frequency::{CorpusOracle, DEFAULT_LANG, FrequencyOracle, FrequencyTable};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Configuration for a frequency run
pub struct FrequencyConfig {
    pub wordlist: PathBuf,
    pub output: PathBuf,
    pub corpus: PathBuf,
    /// Language looked up in the corpus
    pub lang: String,
    /// Language of a corpus without a `# lang:` header
    pub corpus_lang: String,
}

impl FrequencyConfig {
    #[must_use]
    pub fn new(wordlist: PathBuf, output: PathBuf, corpus: PathBuf) -> Self {
        Self {
            wordlist,
            output,
            corpus,
            lang: DEFAULT_LANG.to_string(),
            corpus_lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Build the frequency table from a counts corpus
///
/// The word list is parsed before the corpus is loaded, so a broken word list
/// is reported first.
///
/// # Errors
///
/// Returns an error if the word list cannot be read or parsed, the corpus
/// cannot be loaded, the oracle rejects the language, or the output cannot be
/// written.
pub fn run_frequency(config: &FrequencyConfig) -> Result<Summary> {
    let words = load_word_list(&config.wordlist)?;

    let oracle = CorpusOracle::load(&config.corpus, &config.corpus_lang)?;
    if oracle.lang() != config.lang {
        tracing::debug!("corpus is {:?}, scoring for {:?}", oracle.lang(), config.lang);
    }

    let progress = ProgressBar::new(words.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    progress.set_message("scoring");

    let result = write_frequency_table(&words, &oracle, &config.lang, &config.output, &progress);
    progress.finish_and_clear();
    result
}

/// Score `words` with any oracle and write the table to `output`
///
/// # Errors
///
/// Returns the oracle's error unchanged, or an error if the output cannot be
/// written. Nothing is written when the oracle fails.
pub fn write_frequency_table<O: FrequencyOracle + ?Sized>(
    words: &[String],
    oracle: &O,
    lang: &str,
    output: &Path,
    progress: &ProgressBar,
) -> Result<Summary> {
    let table = FrequencyTable::annotate_with_progress(words, oracle, lang, progress)?;

    let text = render_score_table(FREQUENCY_TABLE_NAME, table.entries());
    write_atomic(output, &text).with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("wrote {} scores to {}", table.len(), output.display());

    Ok(Summary {
        out: output.to_path_buf(),
        count: table.len(),
    })
}

fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let source = read_asset(path)?;
    let words = parse_string_list(&source, WORD_LIST_NAME)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
