//! Word frequency scoring
//!
//! Frequency oracles and the tables built from them.

mod oracle;
mod table;

pub use oracle::{CorpusOracle, FrequencyOracle, MINIMUM_ZIPF, OracleError};
pub use table::{FrequencyTable, SCORE_SCALE, scale_score};

/// Language the game's tables are built for
pub const DEFAULT_LANG: &str = "en";
