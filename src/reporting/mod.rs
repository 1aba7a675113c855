//! Console and JSON output for benchmark reports.

mod console;
mod shared;

pub use console::{print_benchmark, print_corrections, print_soundness};

use anyhow::Result;
use serde::Serialize;

/// Prints any serializable report as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
