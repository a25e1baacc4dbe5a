//! Dictionary loading
//!
//! Reads candidate words from a line-oriented dictionary such as
//! `/usr/share/dict/words`.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Extract the accepted candidates from dictionary text
///
/// Each line is trimmed, then kept only if it passes
/// [`Word::from_dictionary_line`]. Duplicates collapse.
///
/// # Examples
/// ```
/// use wordle_assets::wordlists::loader::candidates_from_str;
///
/// let words = candidates_from_str("Hydra\nab\nhydra\ncafé5\n", 5);
/// assert_eq!(words.len(), 1);
/// ```
#[must_use]
pub fn candidates_from_str(content: &str, length: usize) -> FxHashSet<Word> {
    content
        .lines()
        .filter_map(|line| Word::from_dictionary_line(line.trim(), length))
        .collect()
}

/// Load dictionary candidates from a file
///
/// A dictionary that does not exist contributes no candidates. Bytes that are
/// not valid UTF-8 are dropped and the rest of the line is kept.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
///
/// # Examples
/// ```
/// use wordle_assets::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("/nonexistent/dict/words", 5).unwrap();
/// assert!(words.is_empty());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P, length: usize) -> io::Result<FxHashSet<Word>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("dictionary {} not found, merging nothing", path.display());
        return Ok(FxHashSet::default());
    }

    let bytes = fs::read(path)?;
    let content = decode_dropping_invalid(&bytes);
    let words = candidates_from_str(&content, length);
    tracing::debug!(
        "accepted {} candidates from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
