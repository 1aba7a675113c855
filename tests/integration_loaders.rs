// tests/integration_loaders.rs
//! Loader behavior over real directories: ID decoding, variant
//! accumulation, fail-soft diagnostics, and ground-truth corrections.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vulnscore_core::corrections::{CorrectionBook, CorrectionTable, SOLIDIFI};
use vulnscore_core::index::FileIndex;
use vulnscore_core::loader::{
    load_bug_logs, load_manifest, load_results, Diagnostic, ResultSpec, StemResolution,
};
use vulnscore_core::types::{CountMap, VulnKind};

// --- Helpers ---

fn write(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}

fn bug_log(rows: usize) -> String {
    let mut s = String::from("loc,length,bug type,approach\n");
    for i in 0..rows {
        s.push_str(&format!("{},1,re-entrancy,code snippet injection\n", 10 + i));
    }
    s
}

// --- Result directories (JSON) ---

#[test]
fn test_json_variants_accumulate_under_problem_id() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "buggy_12-result.json", r#"{"re-entrancy-warning": 2}"#)?;
    write(
        dir.path(),
        "buggy_12_3-evmlisa-result.json",
        r#"{"vulnerabilities": {"reentrancy": 1}}"#,
    )?;
    write(dir.path(), "buggy_4-result.json", r#"{"re-entrancy-warning": 0}"#)?;

    let report = load_results(dir.path(), &ResultSpec::json(VulnKind::Reentrancy), "evmlisa")?;
    assert_eq!(report.counts, CountMap::from([(4, 0), (12, 3)]));
    assert_eq!(report.matched, 3);
    assert!(report.diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_json_bad_files_are_skipped_not_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "1-result.json", r#"{"tx-origin-warning": 1}"#)?;
    write(dir.path(), "2-result.json", r#"{"solved-jumps-percent": 1}"#)?;
    write(dir.path(), "3-result.json", "{\"tx-origin-warning\": ")?;
    write(
        dir.path(),
        "5-result.json",
        "Picked up _JAVA_OPTIONS: -Xmx4g\n{\"tx-origin-warning\": 2}",
    )?;
    write(dir.path(), "summary.json", r#"{"tx-origin-warning": 50}"#)?;
    write(dir.path(), "4-result.txt", r#"{"tx-origin-warning": 50}"#)?;

    let report = load_results(dir.path(), &ResultSpec::json(VulnKind::TxOrigin), "evmlisa")?;
    assert_eq!(report.counts, CountMap::from([(1, 1), (5, 2)]));
    assert_eq!(report.seen, 4);
    assert_eq!(report.failures(), 1);
    assert!(report
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::MissingField { .. })));
    Ok(())
}

#[test]
fn test_missing_result_directory_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let spec = ResultSpec::json(VulnKind::Reentrancy);
    assert!(load_results(&dir.path().join("nope"), &spec, "evmlisa").is_err());
}

// --- Result directories (marker) ---

#[test]
fn test_marker_counts_only_matching_file_names() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "7-reentrancy.csv", "pc,op\n12,SSTORE\n40,SSTORE\n")?;
    write(dir.path(), "7_2-reentrancy.csv", "pc,op\n9,SSTORE\n")?;
    write(dir.path(), "7-result.json", "SSTORE SSTORE SSTORE")?;
    write(dir.path(), "notes-reentrancy.csv", "SSTORE")?;

    let spec = ResultSpec::marker(VulnKind::Reentrancy, "SSTORE");
    let report = load_results(dir.path(), &spec, "ethersolve")?;
    assert_eq!(report.counts, CountMap::from([(7, 3)]));
    Ok(())
}

// --- Bug logs ---

#[test]
fn test_bug_logs_apply_correction_table() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "BugLog_12.csv", &bug_log(40))?;
    write(dir.path(), "BugLog_13.csv", &bug_log(5))?;
    write(dir.path(), "README.md", "not a log")?;

    let table = CorrectionBook::builtin().table(SOLIDIFI, VulnKind::Reentrancy);
    let report = load_bug_logs(dir.path(), &table, SOLIDIFI)?;
    assert_eq!(report.counts, CountMap::from([(12, 31), (13, 5)]));
    assert!(!report.has_integrity_errors());
    Ok(())
}

#[test]
fn test_bug_log_negative_truth_is_reported() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "BugLog_12.csv", &bug_log(2))?;
    write(dir.path(), "BugLog_1.csv", &bug_log(1))?;

    let table = CorrectionBook::builtin().table(SOLIDIFI, VulnKind::Reentrancy);
    let report = load_bug_logs(dir.path(), &table, SOLIDIFI)?;
    assert!(report.has_integrity_errors());
    assert!(!report.counts.contains(12));
    assert_eq!(report.counts.count(1), 1);
    assert!(report.diagnostics.contains(&Diagnostic::Integrity {
        id: 12,
        rows: 2,
        correction: 9
    }));
    Ok(())
}

#[test]
fn test_bug_logs_without_table() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "BugLog_12.csv", &bug_log(3))?;
    let report = load_bug_logs(dir.path(), &CorrectionTable::default(), "custom")?;
    assert_eq!(report.counts.count(12), 3);
    Ok(())
}

// --- Manifests ---

#[test]
fn test_manifest_numeric_names() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("vulnerabilities.json");
    fs::write(
        &path,
        r#"[
            {"name": "3.sol", "vulnerabilities": [{"lines": [12]}, {"lines": [30]}]},
            {"name": "8.sol", "vulnerabilities": []},
            {"name": "9.sol"},
            {"name": "Bank.sol", "vulnerabilities": [{}]}
        ]"#,
    )?;

    let report = load_manifest(&path, StemResolution::Numeric, "smartbugs")?;
    assert_eq!(report.counts, CountMap::from([(3, 2), (8, 0), (9, 0)]));
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::Unresolved {
            name: "Bank.sol".into()
        }]
    );
    Ok(())
}

#[test]
fn test_manifest_through_index() -> Result<()> {
    let dir = TempDir::new()?;
    let sources = dir.path().join("source-code");
    fs::create_dir(&sources)?;
    for name in ["Bank.sol", "Auction.sol"] {
        write(&sources, name, "pragma solidity ^0.4.24;")?;
    }
    let index = FileIndex::generate(&sources)?;

    let path = dir.path().join("vulnerabilities.json");
    fs::write(
        &path,
        r#"[
            {"name": "Bank.sol", "vulnerabilities": [{}, {}, {}]},
            {"name": "Auction.sol", "vulnerabilities": [{}]},
            {"name": "Unknown.sol", "vulnerabilities": [{}]}
        ]"#,
    )?;

    let report = load_manifest(&path, StemResolution::Indexed(&index), "slise")?;
    assert_eq!(report.counts, CountMap::from([(1, 1), (2, 3)]));
    assert_eq!(report.diagnostics.len(), 1);
    Ok(())
}

#[test]
fn test_malformed_manifest_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("vulnerabilities.json");
    fs::write(&path, r#"{"name": "1.sol"}"#)?;
    assert!(load_manifest(&path, StemResolution::Numeric, "smartbugs").is_err());
    Ok(())
}
