// src/loader/mod.rs
//! Turns analyzer outputs and ground-truth artifacts into [`CountMap`]s.
//!
//! Loading is fail-soft: a bad file is recorded as a [`Diagnostic`] and the
//! batch carries on. Only an unreadable top-level input aborts.

pub mod results;
pub mod truth;

pub use results::{load_results, ResultSpec};
pub use truth::{load_bug_logs, load_manifest, StemResolution};

use crate::types::{CountMap, ProblemId};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Banner the JVM prints to stderr when `_JAVA_OPTIONS` is set. Analyzers
/// running on the JVM get it mixed into their redirected JSON output.
const JVM_BANNER: &str = "Picked up _JAVA_OPTIONS";

/// Drops every line carrying the JVM options banner.
pub(crate) fn strip_jvm_banner(content: &str) -> Cow<'_, str> {
    if !content.contains(JVM_BANNER) {
        return Cow::Borrowed(content);
    }
    Cow::Owned(
        content
            .split_inclusive('\n')
            .filter(|line| !line.contains(JVM_BANNER))
            .collect(),
    )
}

/// A recoverable problem met while loading one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The expected count field is absent; the file was skipped.
    MissingField { file: PathBuf, field: String },
    /// The file could not be read or decoded.
    Malformed { file: PathBuf, reason: String },
    /// A manifest record whose name maps to no problem ID.
    Unresolved { name: String },
    /// Correcting a log row count produced a negative truth.
    Integrity {
        id: ProblemId,
        rows: i64,
        correction: i64,
    },
}

impl Diagnostic {
    #[must_use]
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { file, field } => {
                write!(f, "'{field}' not found in {}", file.display())
            }
            Self::Malformed { file, reason } => write!(f, "{}: {reason}", file.display()),
            Self::Unresolved { name } => write!(f, "no problem ID for '{name}'"),
            Self::Integrity {
                id,
                rows,
                correction,
            } => write!(
                f,
                "problem {id}: {rows} logged rows minus correction {correction} is negative"
            ),
        }
    }
}

/// Outcome of loading one input set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Diagnostic label (analyzer/corpus name).
    pub label: String,
    pub counts: CountMap,
    /// Files (or manifest records) examined.
    pub seen: usize,
    /// Files (or records) that contributed to `counts`.
    pub matched: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    /// Number of files that could not be read or decoded.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_failure()).count()
    }

    #[must_use]
    pub fn has_integrity_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_integrity)
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_integrity() {
            tracing::error!(label = %self.label, "{diagnostic}");
        } else {
            tracing::warn!(label = %self.label, "{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(self) -> Self {
        tracing::info!(
            label = %self.label,
            seen = self.seen,
            matched = self.matched,
            failed = self.failures(),
            "loaded {}",
            self.counts
        );
        self
    }
}
