//! Command implementations

pub mod check;
pub mod frequency;
pub mod merge;

pub use check::{CheckConfig, CheckReport, Finding, run_check};
pub use frequency::{FrequencyConfig, run_frequency, write_frequency_table};
pub use merge::{MergeConfig, run_merge};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What a generating command wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub out: PathBuf,
    pub count: usize,
}

fn read_asset(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
