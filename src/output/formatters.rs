//! Formatting utilities for command output

use crate::commands::{CheckReport, Summary};
use serde_json::{Value, json};

/// JSON record printed after an asset is written
#[must_use]
pub fn summary_value(summary: &Summary) -> Value {
    json!({
        "out": summary.out.display().to_string(),
        "count": summary.count,
    })
}

/// JSON record printed after a successful check
#[must_use]
pub fn check_value(report: &CheckReport) -> Value {
    json!({
        "checked": report.wordlist.display().to_string(),
        "count": report.count,
    })
}

/// Pretty-print a JSON record with two-space indentation
#[must_use]
pub fn pretty(value: &Value) -> String {
    // Serializing a `Value` to a String cannot fail
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
