// src/ident.rs
//! Problem identification from result file names.
//!
//! Benchmarks name their per-contract outputs after the source they were
//! compiled from. A contract may be split into several variants
//! (`buggy_12_1-…`, `buggy_12_2-…`); all variants share the problem ID and
//! their counts are summed by the caller.

use crate::types::ProblemId;
use regex::Regex;
use std::sync::LazyLock;

/// One family of file names that carries a problem ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPattern {
    /// `buggy_<id>-…` (SolidiFI).
    Buggy,
    /// `buggy_<id>_<variant>-…` (SolidiFI, split contracts).
    BuggyVariant,
    /// `<id>-…` (SmartBugs, SliSE).
    Plain,
    /// `<id>_<variant>-…` (SmartBugs, SliSE, split contracts).
    PlainVariant,
}

/// Patterns in the order they are tried. First match wins.
pub const PATTERN_ORDER: [IdPattern; 4] = [
    IdPattern::Buggy,
    IdPattern::BuggyVariant,
    IdPattern::Plain,
    IdPattern::PlainVariant,
];

static BUGGY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^buggy_(\d+)-.+$").unwrap_or_else(|_| panic!("Invalid Regex")));
static BUGGY_VARIANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^buggy_(\d+)_(\d+)-.+$").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-.+$").unwrap_or_else(|_| panic!("Invalid Regex")));
static PLAIN_VARIANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)_(\d+)-.+$").unwrap_or_else(|_| panic!("Invalid Regex")));
static BUG_LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BugLog_(\d+)\.\w+$").unwrap_or_else(|_| panic!("Invalid Regex")));

impl IdPattern {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Buggy => &BUGGY_RE,
            Self::BuggyVariant => &BUGGY_VARIANT_RE,
            Self::Plain => &PLAIN_RE,
            Self::PlainVariant => &PLAIN_VARIANT_RE,
        }
    }

    fn has_variant(self) -> bool {
        matches!(self, Self::BuggyVariant | Self::PlainVariant)
    }

    fn capture(self, name: &str) -> Option<FileId> {
        let caps = self.regex().captures(name)?;
        let problem = caps.get(1)?.as_str().parse().ok()?;
        let variant = if self.has_variant() {
            Some(caps.get(2)?.as_str().parse().ok()?)
        } else {
            None
        };
        Some(FileId {
            problem,
            variant,
            pattern: self,
        })
    }
}

/// A decoded result file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileId {
    /// Aggregation key.
    pub problem: ProblemId,
    /// Sub-variant, never used for aggregation.
    pub variant: Option<u32>,
    pub pattern: IdPattern,
}

/// Decodes a result file name. Returns `None` when no pattern matches.
#[must_use]
pub fn resolve(file_name: &str) -> Option<FileId> {
    PATTERN_ORDER.iter().find_map(|p| p.capture(file_name))
}

/// Decodes a ground-truth log name of the form `BugLog_<id>.<ext>`.
#[must_use]
pub fn resolve_bug_log(file_name: &str) -> Option<ProblemId> {
    BUG_LOG_RE
        .captures(file_name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
