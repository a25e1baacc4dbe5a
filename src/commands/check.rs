//! Asset self-check command
//!
//! Loads generated assets the way the game does and reports anything that
//! would break it: malformed words, duplicates, ordering, an empty list, a
//! missing registration block, a guess pool that does not cover the answers,
//! or a frequency table that has drifted from the word list.

use super::read_asset;
use crate::asset::{
    FREQUENCY_TABLE_NAME, GUESS_LIST_NAME, RegistrationBlock, Registry, WORD_LIST_NAME,
    parse_score_table, parse_string_list,
};
use crate::core::{DEFAULT_LENGTH, Word, WordError};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for checking assets
pub struct CheckConfig {
    pub wordlist: PathBuf,
    pub frequency: Option<PathBuf>,
    /// Guess pool asset loaded before the word list, as a page would
    pub guesses: Option<PathBuf>,
    pub length: usize,
}

impl CheckConfig {
    #[must_use]
    pub fn new(wordlist: PathBuf) -> Self {
        Self {
            wordlist,
            frequency: None,
            guesses: None,
            length: DEFAULT_LENGTH,
        }
    }
}

/// A single problem found in the assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    EmptyList,
    InvalidWord { word: String, error: WordError },
    Duplicate { word: String },
    OutOfOrder { previous: String, word: String },
    RegistrationMissing { length: usize },
    GuessPoolIncomplete { missing: usize },
    FrequencyCount { expected: usize, found: usize },
    FrequencyMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => write!(f, "word list is empty"),
            Self::InvalidWord { word, error } => write!(f, "{word:?}: {error}"),
            Self::Duplicate { word } => write!(f, "{word:?} appears more than once"),
            Self::OutOfOrder { previous, word } => {
                write!(f, "{word:?} follows {previous:?} out of order")
            }
            Self::RegistrationMissing { length } => {
                write!(f, "no registration block for length {length}")
            }
            Self::GuessPoolIncomplete { missing } => {
                write!(f, "guess pool is missing {missing} answer words")
            }
            Self::FrequencyCount { expected, found } => {
                write!(f, "frequency table has {found} entries, word list has {expected}")
            }
            Self::FrequencyMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "frequency entry {index} is {found:?}, word list has {expected:?}"
            ),
        }
    }
}

/// Outcome of checking the assets
#[derive(Debug)]
pub struct CheckReport {
    pub wordlist: PathBuf,
    pub count: usize,
    pub frequency_checked: bool,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Inspect the words of a list for format, uniqueness and order problems
#[must_use]
pub fn check_words(words: &[String], length: usize) -> Vec<Finding> {
    let mut findings = Vec::new();
    if words.is_empty() {
        findings.push(Finding::EmptyList);
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (i, word) in words.iter().enumerate() {
        if let Err(error) = Word::new(word.as_str(), length) {
            findings.push(Finding::InvalidWord {
                word: word.clone(),
                error,
            });
        }
        if !seen.insert(word.as_str()) {
            findings.push(Finding::Duplicate { word: word.clone() });
        }
        if i > 0 && words[i - 1] > *word {
            findings.push(Finding::OutOfOrder {
                previous: words[i - 1].clone(),
                word: word.clone(),
            });
        }
    }

    findings
}

/// Confirm the asset registers its list and every answer ends up guessable
///
/// The registration block must appear in `source`. It is then replayed on a
/// registry that already holds `guesses`, if given, so a dedicated guess pool
/// loaded first has to cover the answers itself.
#[must_use]
pub fn check_registration(
    source: &str,
    words: &[String],
    length: usize,
    guesses: Option<&[String]>,
) -> Vec<Finding> {
    let block = RegistrationBlock::new(WORD_LIST_NAME, length);
    if !block.is_present_in(source) {
        return vec![Finding::RegistrationMissing { length }];
    }

    let mut registry = Registry::new();
    if let Some(pool) = guesses {
        registry.set_guesses(length, pool.to_vec());
    }
    block.apply(&mut registry, words);

    let pool: FxHashSet<&str> = registry
        .guesses(length)
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect();
    let missing = words.iter().filter(|w| !pool.contains(w.as_str())).count();

    if missing > 0 {
        vec![Finding::GuessPoolIncomplete { missing }]
    } else {
        Vec::new()
    }
}

/// Confirm the frequency table has exactly the list's words, in order
#[must_use]
pub fn check_frequency(words: &[String], entries: &[(String, i64)]) -> Vec<Finding> {
    let mut findings = Vec::new();
    if words.len() != entries.len() {
        findings.push(Finding::FrequencyCount {
            expected: words.len(),
            found: entries.len(),
        });
    }

    if let Some((index, (expected, (found, _)))) = words
        .iter()
        .zip(entries)
        .enumerate()
        .find(|(_, (word, (key, _)))| word != &key)
    {
        findings.push(Finding::FrequencyMismatch {
            index,
            expected: expected.clone(),
            found: found.clone(),
        });
    }

    findings
}

/// Check the word list asset, and the frequency table when configured
///
/// Problems with the content are collected in the report; only unreadable or
/// unparsable files are errors.
///
/// # Errors
///
/// Returns an error if an asset cannot be read or parsed.
pub fn run_check(config: &CheckConfig) -> Result<CheckReport> {
    let source = read_asset(&config.wordlist)?;
    let words = parse_string_list(&source, WORD_LIST_NAME)
        .with_context(|| format!("Failed to parse {}", config.wordlist.display()))?;

    let guesses = config.guesses.as_deref().map(load_guesses).transpose()?;

    let mut findings = check_words(&words, config.length);
    findings.extend(check_registration(
        &source,
        &words,
        config.length,
        guesses.as_deref(),
    ));

    if let Some(path) = &config.frequency {
        let source = read_asset(path)?;
        let entries = parse_score_table(&source, FREQUENCY_TABLE_NAME)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        findings.extend(check_frequency(&words, &entries));
    }

    for finding in &findings {
        tracing::warn!("{finding}");
    }

    Ok(CheckReport {
        wordlist: config.wordlist.clone(),
        count: words.len(),
        frequency_checked: config.frequency.is_some(),
        findings,
    })
}

fn load_guesses(path: &Path) -> Result<Vec<String>> {
    let source = read_asset(path)?;
    parse_string_list(&source, GUESS_LIST_NAME)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::render_word_list;
    use std::fs;

    fn registered(words: &[String]) -> String {
        let block = RegistrationBlock::new(WORD_LIST_NAME, 5);
        render_word_list(WORD_LIST_NAME, words, Some(&block))
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn clean_list_has_no_findings() {
        assert!(check_words(&strings(&["aback", "abase", "crane"]), 5).is_empty());
    }

    #[test]
    fn empty_list_is_reported() {
        assert_eq!(check_words(&[], 5), [Finding::EmptyList]);
    }

    #[test]
    fn invalid_words_are_reported() {
        let findings = check_words(&strings(&["Crane", "cran"]), 5);
        assert!(matches!(
            findings[0],
            Finding::InvalidWord {
                error: WordError::InvalidCharacters,
                ..
            }
        ));
        assert!(findings.iter().any(|f| matches!(
            f,
            Finding::InvalidWord {
                error: WordError::InvalidLength { actual: 4, .. },
                ..
            }
        )));
    }

    #[test]
    fn duplicates_and_order_are_reported() {
        let findings = check_words(&strings(&["slate", "crane", "crane"]), 5);
        assert_eq!(
            findings,
            [
                Finding::OutOfOrder {
                    previous: "slate".to_string(),
                    word: "crane".to_string()
                },
                Finding::Duplicate {
                    word: "crane".to_string()
                },
            ]
        );
    }

    #[test]
    fn registration_covers_answers() {
        let words = strings(&["aback", "crane"]);
        assert!(check_registration(&registered(&words), &words, 5, None).is_empty());
    }

    #[test]
    fn data_only_list_is_not_registered() {
        let words = strings(&["aback", "crane"]);
        let source = render_word_list(WORD_LIST_NAME, &words, None);

        assert_eq!(
            check_registration(&source, &words, 5, None),
            [Finding::RegistrationMissing { length: 5 }]
        );
    }

    #[test]
    fn registration_for_other_length_is_missing() {
        let words = strings(&["aback", "crane"]);
        assert_eq!(
            check_registration(&registered(&words), &words, 6, None),
            [Finding::RegistrationMissing { length: 6 }]
        );
    }

    #[test]
    fn dedicated_guess_pool_must_cover_answers() {
        let words = strings(&["aback", "crane", "slate"]);
        let source = registered(&words);

        let partial = strings(&["aback", "aahed"]);
        assert_eq!(
            check_registration(&source, &words, 5, Some(partial.as_slice())),
            [Finding::GuessPoolIncomplete { missing: 2 }]
        );

        let full = strings(&["aahed", "aback", "crane", "slate"]);
        assert!(check_registration(&source, &words, 5, Some(full.as_slice())).is_empty());
    }

    #[test]
    fn frequency_table_must_match_list() {
        let words = strings(&["apple", "zebra"]);
        let good = vec![("apple".to_string(), 1), ("zebra".to_string(), 2)];
        assert!(check_frequency(&words, &good).is_empty());

        let swapped = vec![("zebra".to_string(), 2), ("apple".to_string(), 1)];
        assert_eq!(
            check_frequency(&words, &swapped),
            [Finding::FrequencyMismatch {
                index: 0,
                expected: "apple".to_string(),
                found: "zebra".to_string()
            }]
        );

        let short = vec![("apple".to_string(), 1)];
        assert_eq!(
            check_frequency(&words, &short),
            [Finding::FrequencyCount {
                expected: 2,
                found: 1
            }]
        );
    }

    #[test]
    fn run_check_reads_both_assets() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = dir.path().join("wordlist.js");
        let frequency = dir.path().join("modern_word_frequency.js");
        fs::write(&wordlist, registered(&strings(&["apple", "zebra"]))).unwrap();
        fs::write(
            &frequency,
            "const MODERN_WORD_FREQUENCY = {\n  \"apple\": 4512,\n  \"zebra\": 2871,\n};\n",
        )
        .unwrap();

        let mut config = CheckConfig::new(wordlist);
        config.frequency = Some(frequency);
        let report = run_check(&config).unwrap();

        assert!(report.is_ok(), "{:?}", report.findings);
        assert_eq!(report.count, 2);
        assert!(report.frequency_checked);
    }

    #[test]
    fn run_check_reads_guess_pool() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = dir.path().join("wordlist.js");
        let guesses = dir.path().join("guesses.js");
        fs::write(&wordlist, registered(&strings(&["apple", "zebra"]))).unwrap();
        fs::write(&guesses, "const GUESS_LIST = [\"apple\"];\n").unwrap();

        let mut config = CheckConfig::new(wordlist);
        config.guesses = Some(guesses);
        let report = run_check(&config).unwrap();

        assert_eq!(report.findings, [Finding::GuessPoolIncomplete { missing: 1 }]);
    }

    #[test]
    fn run_check_fails_on_unparsable_asset() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = dir.path().join("wordlist.js");
        fs::write(&wordlist, "export default [];\n").unwrap();

        assert!(run_check(&CheckConfig::new(wordlist)).is_err());
    }
}
