//! Terminal output formatting
//!
//! JSON summaries for scripts and coloured reports for people.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_check_summary, print_summary};
