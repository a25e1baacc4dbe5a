//! Wordle Assets
//!
//! Regenerates the static word list and word frequency assets loaded by a
//! browser Wordle game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assets::asset::{RegistrationBlock, parse_string_list, render_word_list};
//! use wordle_assets::wordlists::{loader::candidates_from_str, merge};
//!
//! let existing = parse_string_list("const WORD_LIST = [\"slate\", \"crane\",];", "WORD_LIST").unwrap();
//! let words = merge(existing, candidates_from_str("Hydra\nab\n", 5));
//! assert_eq!(words, ["crane", "hydra", "slate"]);
//!
//! let block = RegistrationBlock::new("WORD_LIST", 5);
//! let asset = render_word_list("WORD_LIST", &words, Some(&block));
//! assert_eq!(parse_string_list(&asset, "WORD_LIST").unwrap(), words);
//! ```

// Core domain types
pub mod core;

// Asset grammar, rendering and registration
pub mod asset;

// Dictionary loading and list merging
pub mod wordlists;

// Frequency oracles and tables
pub mod frequency;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
