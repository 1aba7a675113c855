// tests/unit_config.rs
use std::fs;
use std::path::PathBuf;
use vulnscore_core::config::{Config, ResultFormat, ScoringConfig, TruthSource};
use vulnscore_core::corrections::SOLIDIFI;
use vulnscore_core::types::VulnKind;

const BENCHMARKS: &str = r#"
[scoring]
marker_token = "SSTORE"

[[benchmark]]
name = "solidifi-reentrancy"
dataset = "solidifi"
kind = "reentrancy"
truth = { buglog = "./SolidiFI-buggy-contracts/Re-entrancy" }

[[benchmark.analyzer]]
label = "evmlisa"
results = "./reentrancy-solidifi/results/evmlisa"
baseline = "./vanilla-solidifi/results/evmlisa"

[[benchmark.analyzer]]
label = "ethersolve"
format = "marker"
results = "./reentrancy-solidifi/results/ethersolve"

[[benchmark]]
name = "slise-reentrancy"
dataset = "slise"
kind = "reentrancy"
truth = { manifest = "./reentrancy-slise-db1/source-code/vulnerabilities.json", index = "./reentrancy-slise-db1/match-file-index.json" }

[[benchmark.analyzer]]
label = "evmlisa"
results = "./reentrancy-slise-db1/results/evmlisa"
"#;

#[test]
fn test_defaults() {
    let s = ScoringConfig::default();
    assert_eq!(s.marker_token, "SSTORE");
    assert!(s.clamp_negative_observed);

    let c = Config::new();
    assert!(c.benchmarks.is_empty());
    assert_eq!(c.corrections.table(SOLIDIFI, VulnKind::TxOrigin).adjustment(36), 7);
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load(Some(&d.path().join("vulnscore.toml"))).unwrap();
    assert!(c.benchmarks.is_empty());
}

#[test]
fn test_load_benchmarks() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("vulnscore.toml");
    fs::write(&path, BENCHMARKS).unwrap();

    let c = Config::load(Some(&path)).unwrap();
    assert_eq!(c.benchmarks.len(), 2);

    let solidifi = c.benchmark("solidifi-reentrancy").unwrap();
    assert_eq!(solidifi.kind, VulnKind::Reentrancy);
    assert_eq!(solidifi.analyzers.len(), 2);
    assert_eq!(solidifi.analyzers[0].format, ResultFormat::Json);
    assert_eq!(solidifi.analyzers[1].format, ResultFormat::Marker);
    assert!(solidifi.analyzers[0].baseline.is_some());
    assert!(matches!(solidifi.truth, TruthSource::BugLog { .. }));

    let slise = c.benchmark("slise-reentrancy").unwrap();
    assert_eq!(
        slise.truth,
        TruthSource::Manifest {
            manifest: PathBuf::from("./reentrancy-slise-db1/source-code/vulnerabilities.json"),
            index: Some(PathBuf::from("./reentrancy-slise-db1/match-file-index.json")),
        }
    );

    assert!(c.benchmark("smartbugs-reentrancy").is_err());
}

#[test]
fn test_correction_overrides_merge_over_builtin() {
    let mut c = Config::new();
    c.parse_toml(
        r#"
[corrections.solidifi.reentrancy]
12 = 4
50 = 2

[corrections.smartbugs.tx-origin]
3 = 1
"#,
    )
    .unwrap();

    let t = c.corrections.table(SOLIDIFI, VulnKind::Reentrancy);
    assert_eq!(t.adjustment(12), 4);
    assert_eq!(t.adjustment(50), 2);
    assert_eq!(t.adjustment(11), 1);
    assert_eq!(
        c.corrections
            .table("smartbugs", VulnKind::TxOrigin)
            .adjustment(3),
        1
    );
}

#[test]
fn test_unknown_kind_in_corrections_is_rejected() {
    let mut c = Config::new();
    let res = c.parse_toml("[corrections.solidifi.overflow]\n1 = 1\n");
    assert!(res.is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("vulnscore.toml");
    fs::write(&path, "[[benchmark]]\nname = ").unwrap();
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_benchmark_without_analyzers_is_rejected() {
    let mut c = Config::new();
    let res = c.parse_toml(
        r#"
[[benchmark]]
name = "lonely"
dataset = "solidifi"
kind = "tx-origin"
truth = { buglog = "./logs" }
"#,
    );
    assert!(res.is_err());
}
