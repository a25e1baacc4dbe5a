//! Word list entries
//!
//! A Word is a lowercase ASCII token of a fixed length. Every entry a generated
//! word list asset may hold is a valid Word.

use std::fmt;

/// Length of the answer words of the classic game
pub const DEFAULT_LENGTH: usize = 5;

/// A lowercase word of a fixed length
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    ZeroLength,
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only lowercase letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a Word from text that is already in list form
    ///
    /// Unlike dictionary candidates, no case folding happens here: the text must
    /// already be `length` lowercase ASCII letters.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - `length` is zero
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains anything but `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use wordle_assets::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("Crane", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        if length == 0 {
            return Err(WordError::ZeroLength);
        }

        let text: String = text.into();
        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Accept a dictionary line as a candidate word
    ///
    /// The line must be exactly `length` ASCII letters of either case, and must
    /// still be `length` lowercase ASCII letters once lowercased. The second
    /// check keeps out anything that Unicode case folding could smuggle in.
    ///
    /// # Examples
    /// ```
    /// use wordle_assets::core::Word;
    ///
    /// assert_eq!(Word::from_dictionary_line("Hydra", 5).unwrap().text(), "hydra");
    /// assert!(Word::from_dictionary_line("café5", 5).is_none());
    /// assert!(Word::from_dictionary_line("ab", 5).is_none());
    /// assert!(Word::from_dictionary_line("", 0).is_none());
    /// ```
    #[must_use]
    pub fn from_dictionary_line(line: &str, length: usize) -> Option<Self> {
        if length == 0 || line.len() != length || !line.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        Self::new(line.to_lowercase(), length).ok()
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word, returning its text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, since zero-length words are rejected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
