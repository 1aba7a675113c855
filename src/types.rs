// src/types.rs
//! Sparse problem-keyed maps and the vulnerability vocabulary shared by every stage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one benchmark contract instance.
pub type ProblemId = u32;

/// Closed set of vulnerability kinds a benchmark can be scored on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum VulnKind {
    Reentrancy,
    TxOrigin,
    TimestampDependency,
    RandomnessDependency,
}

impl VulnKind {
    pub const ALL: [Self; 4] = [
        Self::Reentrancy,
        Self::TxOrigin,
        Self::TimestampDependency,
        Self::RandomnessDependency,
    ];

    /// Kebab-case name used on the command line and in config tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reentrancy => "reentrancy",
            Self::TxOrigin => "tx-origin",
            Self::TimestampDependency => "timestamp-dependency",
            Self::RandomnessDependency => "randomness-dependency",
        }
    }

    /// Key inside the `vulnerabilities` object of a primary analyzer result.
    #[must_use]
    pub fn vulnerability_key(self) -> &'static str {
        match self {
            Self::Reentrancy => "reentrancy",
            Self::TxOrigin => "tx_origin",
            Self::TimestampDependency => "timestamp_dependency",
            Self::RandomnessDependency => "randomness_dependency_definite",
        }
    }

    /// Top-level key written by older primary analyzer builds.
    #[must_use]
    pub fn legacy_key(self) -> &'static str {
        match self {
            Self::Reentrancy => "re-entrancy-warning",
            Self::TxOrigin => "tx-origin-warning",
            Self::TimestampDependency => "timestamp-dependency-warning",
            Self::RandomnessDependency => "randomness-dependency-warning",
        }
    }

    /// Substring a marker-format result file name must contain.
    #[must_use]
    pub fn marker_filter(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for VulnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse mapping from problem to count. Absent keys read as zero.
///
/// Values are signed because a differential count may legitimately go
/// negative; loaders only ever produce non-negative values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountMap(BTreeMap<ProblemId, i64>);

impl CountMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to the running total of `id`, creating the key if needed.
    pub fn add(&mut self, id: ProblemId, count: i64) {
        *self.0.entry(id).or_insert(0) += count;
    }

    pub fn insert(&mut self, id: ProblemId, count: i64) {
        self.0.insert(id, count);
    }

    #[must_use]
    pub fn get(&self, id: ProblemId) -> Option<i64> {
        self.0.get(&id).copied()
    }

    /// Count for `id`, defaulting to zero when absent.
    #[must_use]
    pub fn count(&self, id: ProblemId) -> i64 {
        self.get(id).unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, id: ProblemId) -> bool {
        self.0.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (ProblemId, i64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = ProblemId> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(ProblemId, i64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (ProblemId, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(ProblemId, i64); N]> for CountMap {
    fn from(entries: [(ProblemId, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl fmt::Display for CountMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

/// Per-problem score (precision, recall or F-measure).
pub type ScoreMap = BTreeMap<ProblemId, f64>;
