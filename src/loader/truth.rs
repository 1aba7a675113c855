// src/loader/truth.rs
//! Ground-truth artifacts: per-problem bug logs and vulnerability manifests.

use super::{Diagnostic, LoadReport};
use crate::corrections::CorrectionTable;
use crate::discovery;
use crate::error::{Result, ScoreError};
use crate::ident;
use crate::index::FileIndex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads `BugLog_<id>.<ext>` files: one header row, then one row per
/// injected bug. The correction for the problem is subtracted from the row
/// count.
///
/// A corrected count below zero is recorded as an integrity diagnostic and
/// the problem is left out of the map.
///
/// # Errors
/// Returns error only if `dir` cannot be listed.
pub fn load_bug_logs(dir: &Path, corrections: &CorrectionTable, label: &str) -> Result<LoadReport> {
    let mut report = LoadReport::new(label);

    for path in discovery::list_files(dir)? {
        let Some(id) = ident::resolve_bug_log(discovery::file_name(&path)) else {
            continue;
        };
        report.seen += 1;

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                report.record(Diagnostic::Malformed {
                    file: path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let rows = data_rows(&content);
        let correction = corrections.adjustment(id);
        let count = rows - correction;
        if count < 0 {
            report.record(Diagnostic::Integrity {
                id,
                rows,
                correction,
            });
            continue;
        }

        report.matched += 1;
        report.counts.insert(id, count);
    }

    Ok(report.finish())
}

/// Lines after the header. A file without a header has no rows.
fn data_rows(content: &str) -> i64 {
    let lines = content.lines().count();
    i64::try_from(lines.saturating_sub(1)).unwrap_or(i64::MAX)
}

/// How manifest record names become problem IDs.
#[derive(Debug, Clone, Copy)]
pub enum StemResolution<'a> {
    /// The stem is the decimal problem ID.
    Numeric,
    /// The stem is looked up in a prepared index.
    Indexed(&'a FileIndex),
}

impl StemResolution<'_> {
    fn resolve(self, stem: &str) -> Option<u32> {
        match self {
            Self::Numeric => stem.parse().ok(),
            Self::Indexed(index) => index.get(stem),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    name: String,
    #[serde(default)]
    vulnerabilities: Vec<Value>,
}

/// Loads a JSON manifest: an array of `{ "name": …, "vulnerabilities": [...] }`
/// records. The true count of a problem is the length of its list.
///
/// # Errors
/// Returns error if the manifest cannot be read or is not a record array.
pub fn load_manifest(path: &Path, resolution: StemResolution<'_>, label: &str) -> Result<LoadReport> {
    let content = fs::read_to_string(path).map_err(|e| ScoreError::io(e, path))?;
    let records: Vec<ManifestRecord> =
        serde_json::from_str(&content).map_err(|e| ScoreError::json(e, path))?;

    let mut report = LoadReport::new(label);
    for record in records {
        report.seen += 1;
        let stem = strip_extension(&record.name);
        let Some(id) = resolution.resolve(stem) else {
            report.record(Diagnostic::Unresolved {
                name: record.name.clone(),
            });
            continue;
        };
        report.matched += 1;
        let count = i64::try_from(record.vulnerabilities.len()).unwrap_or(i64::MAX);
        report.counts.add(id, count);
    }

    Ok(report.finish())
}

/// `"12.sol"` -> `"12"`. Dots inside directory components are left alone.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot > 0 && !name[dot..].contains('/') => &name[..dot],
        _ => name,
    }
}
