//! Generated script assets
//!
//! Reading and writing the `const NAME = <literal>;` files the game loads.

mod lexer;
mod parser;
mod registry;
mod writer;

pub use lexer::Position;
pub use parser::{AssetError, parse_score_table, parse_string_list};
pub use registry::{RegistrationBlock, Registry};
pub use writer::{render_score_table, render_word_list, write_atomic};

/// Declaration name of the answer list asset
pub const WORD_LIST_NAME: &str = "WORD_LIST";

/// Declaration name of a dedicated guess pool asset
pub const GUESS_LIST_NAME: &str = "GUESS_LIST";

/// Declaration name of the frequency table asset
pub const FREQUENCY_TABLE_NAME: &str = "MODERN_WORD_FREQUENCY";
