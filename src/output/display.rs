//! Display functions for command results
//!
//! Machine-readable records go to stdout; the human report goes to stderr.

use super::formatters::{check_value, pretty, summary_value};
use crate::commands::{CheckReport, Summary};
use colored::Colorize;

/// Print the record of a written asset
pub fn print_summary(summary: &Summary) {
    println!("{}", pretty(&summary_value(summary)));
}

/// Print the record of a passed check
pub fn print_check_summary(report: &CheckReport) {
    println!("{}", pretty(&check_value(report)));
}

/// Print the human-readable check report
pub fn print_check_report(report: &CheckReport) {
    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(
        "Checking: {}",
        report.wordlist.display().to_string().bright_yellow().bold()
    );
    eprintln!("{}", "─".repeat(60).cyan());

    eprintln!("   Words:            {}", report.count);
    eprintln!(
        "   Frequency table:  {}",
        if report.frequency_checked {
            "checked"
        } else {
            "skipped"
        }
    );

    if report.is_ok() {
        eprintln!("\n{}", "✅ Assets look good".green().bold());
        return;
    }

    eprintln!();
    for finding in &report.findings {
        eprintln!("   {} {finding}", "✗".red());
    }
    eprintln!(
        "\n{}",
        format!("❌ {} problem(s) found", report.findings.len())
            .red()
            .bold()
    );
}
