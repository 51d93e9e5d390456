use colored::Colorize;
use std::path::PathBuf;

use crate::error::CheckError;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Print the run summary and return the process exit code.
///
/// Findings are listed in the order the files were discovered.
pub fn print_summary(findings: &[(PathBuf, CheckError)]) -> i32 {
    if findings.is_empty() {
        println!("{}", "No duplicate YAML keys or parse errors found.".green());
        return EXIT_OK;
    }

    println!("{}", "Duplicate or parse errors found in YAML files:".red());
    for (path, error) in findings {
        println!("- {}: {error}", path.display());
    }
    EXIT_FINDINGS
}
