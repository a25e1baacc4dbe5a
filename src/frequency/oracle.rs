//! Word frequency oracles
//!
//! An oracle scores a word on the Zipf scale: the base-10 logarithm of its
//! occurrences per billion words. Everyday words land between 4 and 7; words
//! the oracle has never seen score the floor value of 0.

use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Score given to words the oracle does not know
pub const MINIMUM_ZIPF: f64 = 0.0;

/// Failure raised by a frequency oracle
#[derive(Debug)]
pub enum OracleError {
    /// The oracle has no data for the requested language
    UnsupportedLanguage { requested: String, available: String },
    /// A corpus line could not be understood
    Corpus {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    /// The corpus could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage {
                requested,
                available,
            } => write!(
                f,
                "No word frequency data for language {requested:?} (corpus is {available:?})"
            ),
            Self::Corpus { path, line, reason } => {
                write!(f, "{}:{line}: {reason}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read corpus {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Source of Zipf frequency scores
pub trait FrequencyOracle {
    /// Zipf frequency of `word` in language `lang`
    ///
    /// # Errors
    ///
    /// Returns `OracleError` if the oracle cannot answer for `lang`.
    fn zipf_frequency(&self, word: &str, lang: &str) -> Result<f64, OracleError>;
}

/// Oracle backed by a unigram count corpus for one language
///
/// The corpus is a text file of `word count` lines. Blank lines and lines
/// starting with `#` are skipped; words are case-folded and repeated words
/// have their counts summed. A `# lang: <code>` comment names the corpus
/// language.
#[derive(Debug, Clone)]
pub struct CorpusOracle {
    lang: String,
    counts: FxHashMap<String, u64>,
    total: u64,
}

impl CorpusOracle {
    /// Build an oracle from `(word, count)` pairs
    pub fn from_counts<I, S>(lang: impl Into<String>, counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table: FxHashMap<String, u64> = FxHashMap::default();
        for (word, count) in counts {
            *table.entry(word.as_ref().to_lowercase()).or_insert(0) += count;
        }
        let total = table.values().sum();

        Self {
            lang: lang.into(),
            counts: table,
            total,
        }
    }

    /// Load a corpus file
    ///
    /// The language comes from the file's `# lang:` header; `default_lang` is
    /// used when the file has none.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Io` if the file cannot be read, and
    /// `OracleError::Corpus` for the first malformed line.
    pub fn load<P: AsRef<Path>>(path: P, default_lang: &str) -> Result<Self, OracleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OracleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lang = None;
        let mut counts = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let corpus_error = |reason: String| OracleError::Corpus {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };

            let line = raw.trim();
            if let Some(comment) = line.strip_prefix('#') {
                if let Some(code) = language_header(comment) {
                    if code.is_empty() {
                        return Err(corpus_error("empty language header".to_string()));
                    }
                    lang = Some(code);
                }
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(word), Some(count), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(corpus_error(format!("expected `word count`, got {line:?}")));
            };
            let count: u64 = count
                .parse()
                .map_err(|_| corpus_error(format!("count {count:?} is not a whole number")))?;
            counts.push((word, count));
        }

        let oracle = Self::from_counts(lang.unwrap_or(default_lang), counts);
        tracing::debug!(
            "loaded {} distinct {} words ({} tokens) from {}",
            oracle.counts.len(),
            oracle.lang,
            oracle.total,
            path.display()
        );
        Ok(oracle)
    }

    /// Language code this corpus answers for
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

/// Language code of a `# lang: xx` comment, if that is what it is
fn language_header(comment: &str) -> Option<&str> {
    let (key, value) = comment.split_once(':')?;
    key.trim().eq_ignore_ascii_case("lang").then_some(value.trim())
}

/// Convert a proportion of all tokens to the Zipf scale, rounded to 2 decimals
fn proportion_to_zipf(proportion: f64) -> f64 {
    let zipf = (proportion.log10() + 9.0) * 100.0;
    (zipf.round() / 100.0).max(MINIMUM_ZIPF)
}

impl FrequencyOracle for CorpusOracle {
    fn zipf_frequency(&self, word: &str, lang: &str) -> Result<f64, OracleError> {
        if lang != self.lang {
            return Err(OracleError::UnsupportedLanguage {
                requested: lang.to_string(),
                available: self.lang.clone(),
            });
        }

        let count = self.counts.get(&word.to_lowercase()).copied().unwrap_or(0);
        if count == 0 || self.total == 0 {
            return Ok(MINIMUM_ZIPF);
        }

        Ok(proportion_to_zipf(count as f64 / self.total as f64))
    }
}
