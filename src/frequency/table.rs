//! Word frequency tables
//!
//! One integer score per word, in word list order.

use super::oracle::{FrequencyOracle, OracleError};
use indicatif::ProgressBar;

/// Factor applied to Zipf scores before truncation
pub const SCORE_SCALE: f64 = 1000.0;

/// Scale a Zipf score to the integer stored in the table
///
/// Truncates toward zero.
///
/// # Examples
/// ```
/// use wordle_assets::frequency::scale_score;
///
/// assert_eq!(scale_score(4.5129), 4512);
/// assert_eq!(scale_score(-0.0019), -1);
/// ```
#[must_use]
pub fn scale_score(zipf: f64) -> i64 {
    (zipf * SCORE_SCALE).trunc() as i64
}

/// Ordered word to score mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, i64)>,
}

impl FrequencyTable {
    /// Score every word, in order, with a hidden progress bar
    ///
    /// # Errors
    ///
    /// Returns the first `OracleError` raised; no partial table is produced.
    pub fn annotate<O: FrequencyOracle + ?Sized>(
        words: &[String],
        oracle: &O,
        lang: &str,
    ) -> Result<Self, OracleError> {
        Self::annotate_with_progress(words, oracle, lang, &ProgressBar::hidden())
    }

    /// Score every word, in order, advancing `progress` once per word
    ///
    /// # Errors
    ///
    /// Returns the first `OracleError` raised; no partial table is produced.
    pub fn annotate_with_progress<O: FrequencyOracle + ?Sized>(
        words: &[String],
        oracle: &O,
        lang: &str,
        progress: &ProgressBar,
    ) -> Result<Self, OracleError> {
        let mut entries = Vec::with_capacity(words.len());
        for word in words {
            let zipf = oracle.zipf_frequency(word, lang)?;
            entries.push((word.clone(), scale_score(zipf)));
            progress.inc(1);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score for a word, if present
    #[must_use]
    pub fn get(&self, word: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, score)| score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::CorpusOracle;

    struct FixedOracle;

    impl FrequencyOracle for FixedOracle {
        fn zipf_frequency(&self, word: &str, _lang: &str) -> Result<f64, OracleError> {
            Ok(match word {
                "apple" => 4.51299,
                "zebra" => 2.875,
                _ => 0.0,
            })
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn scale_truncates_toward_zero() {
        assert_eq!(scale_score(0.0), 0);
        assert_eq!(scale_score(3.9999), 3999);
        assert_eq!(scale_score(7.0), 7000);
        assert_eq!(scale_score(-1.2345), -1234);
    }

    #[test]
    fn table_has_one_entry_per_word_in_order() {
        let table = FrequencyTable::annotate(&words(&["apple", "zebra"]), &FixedOracle, "en").unwrap();

        let keys: Vec<&str> = table.entries().iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(keys, ["apple", "zebra"]);
        assert_eq!(table.get("apple"), Some(4512));
        assert_eq!(table.get("zebra"), Some(2875));
    }

    #[test]
    fn unknown_words_keep_their_slot() {
        let table = FrequencyTable::annotate(&words(&["qajaq", "apple"]), &FixedOracle, "en").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], ("qajaq".to_string(), 0));
    }

    #[test]
    fn oracle_error_propagates() {
        let oracle = CorpusOracle::from_counts("en", [("apple", 1)]);
        let result = FrequencyTable::annotate(&words(&["apple"]), &oracle, "tlh");
        assert!(result.is_err());
    }

    #[test]
    fn progress_advances_per_word() {
        let progress = ProgressBar::hidden();
        FrequencyTable::annotate_with_progress(&words(&["apple", "zebra"]), &FixedOracle, "en", &progress)
            .unwrap();
        assert_eq!(progress.position(), 2);
    }

    #[test]
    fn empty_list_gives_empty_table() {
        let table = FrequencyTable::annotate(&[], &FixedOracle, "en").unwrap();
        assert!(table.is_empty());
    }
}
