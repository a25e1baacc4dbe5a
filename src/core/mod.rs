//! Core domain types for word list assets
//!
//! Pure types with no I/O.

mod word;

pub use word::{DEFAULT_LENGTH, Word, WordError};
