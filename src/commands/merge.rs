//! Word list merge command
//!
//! Rebuilds a word list asset as the union of its current entries and the
//! accepted words of a dictionary.

use super::{Summary, read_asset};
use crate::asset::{RegistrationBlock, WORD_LIST_NAME, parse_string_list, render_word_list, write_atomic};
use crate::core::DEFAULT_LENGTH;
use crate::wordlists::{loader::load_dictionary, merge};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::path::PathBuf;

/// Configuration for a merge run
pub struct MergeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dictionary: Option<PathBuf>,
    pub length: usize,
    pub registration: bool,
}

impl MergeConfig {
    /// Merge `input` with no dictionary, overwriting it in place
    #[must_use]
    pub fn new(input: PathBuf) -> Self {
        Self {
            output: input.clone(),
            input,
            dictionary: None,
            length: DEFAULT_LENGTH,
            registration: true,
        }
    }
}

/// Merge the dictionary into the word list asset and write the result
///
/// Nothing is written unless the input parses and the dictionary (if present)
/// can be read.
///
/// # Errors
///
/// Returns an error if:
/// - The input asset cannot be read or has no parsable `WORD_LIST`
/// - The dictionary exists but cannot be read
/// - The output cannot be written
pub fn run_merge(config: &MergeConfig) -> Result<Summary> {
    let source = read_asset(&config.input)?;
    let existing = parse_string_list(&source, WORD_LIST_NAME)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;
    let existing_count = existing.len();

    let candidates = match &config.dictionary {
        Some(path) => load_dictionary(path, config.length)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?,
        None => FxHashSet::default(),
    };
    let candidate_count = candidates.len();

    let words = merge(existing, candidates);
    tracing::debug!(
        "{existing_count} existing + {candidate_count} candidates -> {} words",
        words.len()
    );

    let block = config
        .registration
        .then(|| RegistrationBlock::new(WORD_LIST_NAME, config.length));
    let text = render_word_list(WORD_LIST_NAME, &words, block.as_ref());
    write_atomic(&config.output, &text)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    tracing::info!("wrote {} words to {}", words.len(), config.output.display());

    Ok(Summary {
        out: config.output.clone(),
        count: words.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Registry;
    use std::fs;
    use std::path::Path;

    const SEED: &str = "const WORD_LIST = [\n  \"slate\",\n  \"crane\",\n];\n";

    fn seed(dir: &Path) -> PathBuf {
        let path = dir.join("wordlist.js");
        fs::write(&path, SEED).unwrap();
        path
    }

    fn read_words(path: &Path) -> Vec<String> {
        parse_string_list(&fs::read_to_string(path).unwrap(), WORD_LIST_NAME).unwrap()
    }

    #[test]
    fn merge_without_dictionary_sorts_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());

        let summary = run_merge(&MergeConfig::new(input.clone())).unwrap();

        assert_eq!(summary.out, input);
        assert_eq!(summary.count, 2);
        assert_eq!(read_words(&input), ["crane", "slate"]);
    }

    #[test]
    fn merge_adds_dictionary_words() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());
        let dict = dir.path().join("words");
        fs::write(&dict, "Hydra\nab\ncafé5\nABCDE\ncrane\nzebras\n").unwrap();

        let mut config = MergeConfig::new(input.clone());
        config.dictionary = Some(dict);
        config.output = dir.path().join("out").join("wordlist.js");
        let summary = run_merge(&config).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(read_words(&config.output), ["abcde", "crane", "hydra", "slate"]);
        // Input left alone when writing elsewhere
        assert_eq!(fs::read_to_string(&input).unwrap(), SEED);
    }

    #[test]
    fn missing_dictionary_matches_no_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());

        let mut without = MergeConfig::new(input.clone());
        without.output = dir.path().join("without.js");
        run_merge(&without).unwrap();

        let mut missing = MergeConfig::new(input);
        missing.dictionary = Some(dir.path().join("no-such-dictionary"));
        missing.output = dir.path().join("missing.js");
        run_merge(&missing).unwrap();

        assert_eq!(
            fs::read_to_string(&without.output).unwrap(),
            fs::read_to_string(&missing.output).unwrap()
        );
    }

    #[test]
    fn rerunning_on_own_output_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());
        let dict = dir.path().join("words");
        fs::write(&dict, "Hydra\nadieu\n").unwrap();

        let mut config = MergeConfig::new(input.clone());
        config.dictionary = Some(dict);
        run_merge(&config).unwrap();
        let first = fs::read_to_string(&input).unwrap();
        run_merge(&config).unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), first);
    }

    #[test]
    fn output_registers_guess_pool_default() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());
        run_merge(&MergeConfig::new(input.clone())).unwrap();

        let text = fs::read_to_string(&input).unwrap();
        assert!(text.contains("if (!Array.isArray(window.GUESS_LISTS[5])) {"));

        let mut registry = Registry::new();
        RegistrationBlock::new(WORD_LIST_NAME, 5).apply(&mut registry, &read_words(&input));
        assert_eq!(registry.guesses(5), registry.answers(5));
    }

    #[test]
    fn data_only_output_has_no_registration() {
        let dir = tempfile::tempdir().unwrap();
        let input = seed(dir.path());
        let mut config = MergeConfig::new(input.clone());
        config.registration = false;
        run_merge(&config).unwrap();

        let text = fs::read_to_string(&input).unwrap();
        assert_eq!(text, "const WORD_LIST = [\n  \"crane\",\n  \"slate\"\n];\n");
    }

    #[test]
    fn unparsable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wordlist.js");
        fs::write(&input, "const WORDS = [];\n").unwrap();

        let mut config = MergeConfig::new(input);
        config.output = dir.path().join("out.js");
        let err = run_merge(&config).unwrap_err();

        assert!(err.chain().any(|e| e.to_string().contains("WORD_LIST")));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = MergeConfig::new(dir.path().join("absent.js"));
        assert!(run_merge(&config).is_err());
    }
}
