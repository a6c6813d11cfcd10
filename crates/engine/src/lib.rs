// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod report;
pub mod stats;

use crate::aggregate::build_directory_totals;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::report::Report;

/// Scan `config.root`, aggregate per directory, and sort both views.
///
/// # Errors
///
/// Returns an error only when the root itself cannot be walked.
/// Per-file read failures are folded into the report as 0 lines.
pub fn run(config: &ScanConfig) -> Result<Report> {
    let records = filesystem::scan(config)?;
    let totals = build_directory_totals(&records);
    Ok(Report::build(records, &totals))
}
