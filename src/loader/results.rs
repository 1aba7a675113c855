// src/loader/results.rs
//! Analyzer result directories.

use super::{Diagnostic, LoadReport};
use crate::config::ResultFormat;
use crate::discovery;
use crate::error::Result;
use crate::ident::{self, FileId};
use crate::types::VulnKind;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Key of the nested object holding per-kind counts.
const VULNERABILITIES_KEY: &str = "vulnerabilities";

/// What to read from each result file.
#[derive(Debug, Clone)]
pub struct ResultSpec {
    pub format: ResultFormat,
    pub kind: VulnKind,
    /// Token counted in marker-format files.
    pub marker: String,
    /// Substring a marker-format file name must contain.
    pub name_filter: String,
}

impl ResultSpec {
    #[must_use]
    pub fn json(kind: VulnKind) -> Self {
        Self {
            format: ResultFormat::Json,
            kind,
            marker: String::new(),
            name_filter: String::new(),
        }
    }

    #[must_use]
    pub fn marker(kind: VulnKind, marker: &str) -> Self {
        Self {
            format: ResultFormat::Marker,
            kind,
            marker: marker.to_string(),
            name_filter: kind.marker_filter().to_string(),
        }
    }
}

enum FileOutcome {
    Counted(FileId, i64),
    Ignored,
    Skipped(Diagnostic),
}

/// Loads every result file in `dir` into a count per problem.
///
/// Variants of the same problem are summed. Files whose name carries no
/// problem ID are ignored.
///
/// # Errors
/// Returns error only if `dir` cannot be listed.
pub fn load_results(dir: &Path, spec: &ResultSpec, label: &str) -> Result<LoadReport> {
    let files = discovery::list_files(dir)?;

    let outcomes: Vec<(PathBuf, FileOutcome)> = files
        .par_iter()
        .map(|path| (path.clone(), read_one(path, spec)))
        .collect();

    let mut report = LoadReport::new(label);
    for (path, outcome) in outcomes {
        match outcome {
            FileOutcome::Counted(id, count) => {
                tracing::debug!(
                    label,
                    file = %path.display(),
                    problem = id.problem,
                    count,
                    "matched"
                );
                report.seen += 1;
                report.matched += 1;
                report.counts.add(id.problem, count);
            }
            FileOutcome::Skipped(diagnostic) => {
                report.seen += 1;
                report.record(diagnostic);
            }
            FileOutcome::Ignored => {}
        }
    }
    Ok(report.finish())
}

fn read_one(path: &Path, spec: &ResultSpec) -> FileOutcome {
    let name = discovery::file_name(path);
    let accepted = match spec.format {
        ResultFormat::Json => name.ends_with(".json"),
        ResultFormat::Marker => name.contains(&spec.name_filter),
    };
    if !accepted {
        return FileOutcome::Ignored;
    }
    let Some(id) = ident::resolve(name) else {
        return FileOutcome::Ignored;
    };

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return malformed(path, e.to_string()),
    };

    match spec.format {
        ResultFormat::Json => count_json(path, &content, spec.kind)
            .map_or_else(FileOutcome::Skipped, |count| FileOutcome::Counted(id, count)),
        ResultFormat::Marker => {
            let count = count_marker(&content, &spec.marker);
            FileOutcome::Counted(id, i64::try_from(count).unwrap_or(i64::MAX))
        }
    }
}

fn malformed(path: &Path, reason: String) -> FileOutcome {
    FileOutcome::Skipped(Diagnostic::Malformed {
        file: path.to_path_buf(),
        reason,
    })
}

/// Reads the warning count for `kind`, preferring the nested
/// `vulnerabilities` object over the legacy top-level key.
fn count_json(path: &Path, content: &str, kind: VulnKind) -> std::result::Result<i64, Diagnostic> {
    let content = super::strip_jvm_banner(content);
    let value: Value = serde_json::from_str(&content).map_err(|e| Diagnostic::Malformed {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let nested = value
        .get(VULNERABILITIES_KEY)
        .and_then(|v| v.get(kind.vulnerability_key()));
    let (field, found) = match nested {
        Some(v) => (kind.vulnerability_key(), Some(v)),
        None => (kind.legacy_key(), value.get(kind.legacy_key())),
    };

    let Some(found) = found else {
        return Err(Diagnostic::MissingField {
            file: path.to_path_buf(),
            field: format!(
                "{VULNERABILITIES_KEY}.{} | {}",
                kind.vulnerability_key(),
                kind.legacy_key()
            ),
        });
    };

    found
        .as_u64()
        .and_then(|n| i64::try_from(n).ok())
        .ok_or_else(|| Diagnostic::Malformed {
            file: path.to_path_buf(),
            reason: format!("'{field}' is not a non-negative integer: {found}"),
        })
}

fn count_marker(content: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    content.matches(marker).count()
}
