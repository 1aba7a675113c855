// src/corrections.rs
//! Hand-curated ground-truth corrections.
//!
//! Some injected-bug logs list instances that never made it into the
//! compiled contract. Each (dataset, kind) pair owns a versioned table of
//! per-problem adjustments that is subtracted from the raw log row count.
//! A problem without an entry has an adjustment of zero.

use crate::types::{ProblemId, VulnKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// SolidiFI v1 table, shared by the reentrancy, tx-origin and
/// timestamp-dependency logs.
const SOLIDIFI_V1: &[(ProblemId, i64)] = &[
    (11, 1),
    (12, 9),
    (18, 1),
    (20, 2),
    (21, 4),
    (22, 7),
    (29, 3),
    (33, 3),
    (36, 7),
    (37, 1),
    (42, 3),
    (48, 1),
];

pub const SOLIDIFI: &str = "solidifi";

/// Adjustments for one (dataset, kind) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionTable {
    pub version: String,
    pub entries: BTreeMap<ProblemId, i64>,
}

impl CorrectionTable {
    fn builtin(version: &str, entries: &[(ProblemId, i64)]) -> Self {
        Self {
            version: version.to_string(),
            entries: entries.iter().copied().collect(),
        }
    }

    /// Adjustment for `id`, zero when the table has no entry.
    #[must_use]
    pub fn adjustment(&self, id: ProblemId) -> i64 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All correction tables known to a run, keyed by (dataset, kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionBook {
    tables: BTreeMap<(String, VulnKind), CorrectionTable>,
}

impl Default for CorrectionBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CorrectionBook {
    /// Tables shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tables = BTreeMap::new();
        for kind in [
            VulnKind::Reentrancy,
            VulnKind::TxOrigin,
            VulnKind::TimestampDependency,
        ] {
            tables.insert(
                (SOLIDIFI.to_string(), kind),
                CorrectionTable::builtin("v1", SOLIDIFI_V1),
            );
        }
        Self { tables }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Table for the pair, or an empty table when none is registered.
    #[must_use]
    pub fn table(&self, dataset: &str, kind: VulnKind) -> CorrectionTable {
        self.tables
            .get(&(dataset.to_string(), kind))
            .cloned()
            .unwrap_or_default()
    }

    /// Sets one adjustment, replacing any built-in value for the same problem.
    pub fn set(&mut self, dataset: &str, kind: VulnKind, id: ProblemId, adjustment: i64) {
        let table = self
            .tables
            .entry((dataset.to_string(), kind))
            .or_insert_with(|| CorrectionTable {
                version: "local".to_string(),
                entries: BTreeMap::new(),
            });
        table.entries.insert(id, adjustment);
    }

    /// Iterates registered tables in (dataset, kind) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, VulnKind, &CorrectionTable)> {
        self.tables
            .iter()
            .map(|((dataset, kind), table)| (dataset.as_str(), *kind, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solidifi_reentrancy_has_builtin_entries() {
        let book = CorrectionBook::builtin();
        let table = book.table(SOLIDIFI, VulnKind::Reentrancy);
        assert_eq!(table.version, "v1");
        assert_eq!(table.adjustment(12), 9);
        assert_eq!(table.adjustment(13), 0);
    }

    #[test]
    fn unknown_pair_is_empty() {
        let book = CorrectionBook::builtin();
        assert!(book.table("smartbugs", VulnKind::Reentrancy).is_empty());
        assert!(book.table(SOLIDIFI, VulnKind::RandomnessDependency).is_empty());
    }

    #[test]
    fn set_overrides_single_entry() {
        let mut book = CorrectionBook::builtin();
        book.set(SOLIDIFI, VulnKind::TxOrigin, 12, 2);
        let table = book.table(SOLIDIFI, VulnKind::TxOrigin);
        assert_eq!(table.adjustment(12), 2);
        assert_eq!(table.adjustment(11), 1);
        assert_eq!(book.table(SOLIDIFI, VulnKind::Reentrancy).adjustment(12), 9);
    }
}
