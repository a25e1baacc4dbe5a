//! Word list merging
//!
//! Unions the entries already in a word list asset with dictionary candidates.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Conventional location of the system dictionary
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Union existing entries with candidates, deduplicated and sorted ascending
///
/// Existing entries are kept as they are; only dictionary candidates are
/// filtered. The result does not depend on the order of either input.
///
/// # Examples
/// ```
/// use wordle_assets::core::Word;
/// use wordle_assets::wordlists::merge;
///
/// let existing = vec!["slate".to_string(), "crane".to_string()];
/// let candidates = [Word::new("adieu", 5).unwrap(), Word::new("crane", 5).unwrap()];
///
/// assert_eq!(merge(existing, candidates), ["adieu", "crane", "slate"]);
/// ```
#[must_use]
pub fn merge<I>(existing: Vec<String>, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = Word>,
{
    let mut merged: FxHashSet<String> = existing.into_iter().collect();
    merged.extend(candidates.into_iter().map(Word::into_string));

    let mut words: Vec<String> = merged.into_iter().collect();
    words.sort_unstable();
    words
}
