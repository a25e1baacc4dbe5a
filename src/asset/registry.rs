//! Length-keyed word list registration
//!
//! The game looks word lists up by length in two registries: answers and the
//! guess pool. A list registered for a length always becomes the answer list;
//! it only becomes the guess pool when nothing else has claimed that length.
//!
//! `RegistrationBlock` carries this rule in both forms: rendered as the guarded
//! browser snippet appended to a generated asset, and applied directly to an
//! in-process `Registry`.

use super::lexer::{Lexer, Token};
use std::collections::BTreeMap;

/// Answer and guess-pool lists keyed by word length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    word_lists: BTreeMap<usize, Vec<String>>,
    guess_lists: BTreeMap<usize, Vec<String>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer list for a length, if registered
    #[must_use]
    pub fn answers(&self, length: usize) -> Option<&[String]> {
        self.word_lists.get(&length).map(Vec::as_slice)
    }

    /// Guess pool for a length, if registered
    #[must_use]
    pub fn guesses(&self, length: usize) -> Option<&[String]> {
        self.guess_lists.get(&length).map(Vec::as_slice)
    }

    /// Install a dedicated guess pool, replacing any existing one
    pub fn set_guesses(&mut self, length: usize, words: Vec<String>) {
        self.guess_lists.insert(length, words);
    }

    /// Lengths that have an answer list
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.word_lists.keys().copied()
    }
}

/// Registration of one generated list under its length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationBlock {
    const_name: String,
    length: usize,
}

impl RegistrationBlock {
    #[must_use]
    pub fn new(const_name: impl Into<String>, length: usize) -> Self {
        Self {
            const_name: const_name.into(),
            length,
        }
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Register `words` as the answer list, defaulting the guess pool to it
    ///
    /// # Examples
    /// ```
    /// use wordle_assets::asset::{Registry, RegistrationBlock};
    ///
    /// let words = vec!["crane".to_string(), "slate".to_string()];
    /// let mut registry = Registry::new();
    /// RegistrationBlock::new("WORD_LIST", 5).apply(&mut registry, &words);
    ///
    /// assert_eq!(registry.answers(5), Some(words.as_slice()));
    /// assert_eq!(registry.guesses(5), Some(words.as_slice()));
    /// ```
    pub fn apply(&self, registry: &mut Registry, words: &[String]) {
        registry.word_lists.insert(self.length, words.to_vec());
        registry
            .guess_lists
            .entry(self.length)
            .or_insert_with(|| words.to_vec());
    }

    /// Browser snippet with the same effect as `apply`
    ///
    /// Only runs where a `window` exists, and leaves an array already present in
    /// `GUESS_LISTS` for this length untouched.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let name = &self.const_name;
        let length = self.length;
        vec![
            "// Provide a consistent multi-length hook for the UI (3/4/5/6/7).".to_string(),
            "// Extra lists can be added by defining `window.WORD_LISTS[length] = [...]` in additional scripts.".to_string(),
            "if (typeof window !== 'undefined') {".to_string(),
            "  window.WORD_LISTS = window.WORD_LISTS || {};".to_string(),
            "  window.GUESS_LISTS = window.GUESS_LISTS || {};".to_string(),
            format!("  window.WORD_LISTS[{length}] = {name};"),
            "  // Default guess pool: answers only (can be overridden by separate guess lists).".to_string(),
            format!("  if (!Array.isArray(window.GUESS_LISTS[{length}])) {{"),
            format!("    window.GUESS_LISTS[{length}] = {name};"),
            "  }".to_string(),
            "}".to_string(),
        ]
    }

    /// Whether `source` contains this block's code
    ///
    /// Compares tokens, so layout and comments may differ. Scanning stops at
    /// the first token the lexer cannot read.
    #[must_use]
    pub fn is_present_in(&self, source: &str) -> bool {
        let block = tokens(&self.render().join("\n"));
        let source = tokens(source);
        !block.is_empty() && source.windows(block.len()).any(|window| window == block.as_slice())
    }
}

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source)
        .map_while(Result::ok)
        .map(|spanned| spanned.token)
        .collect()
}
