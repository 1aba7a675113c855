use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::corrections::CorrectionBook;
use crate::types::VulnKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_marker_token")]
    pub marker_token: String,
    #[serde(default = "default_true")]
    pub clamp_negative_observed: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            marker_token: default_marker_token(),
            clamp_negative_observed: true,
        }
    }
}

fn default_marker_token() -> String { "SSTORE".to_string() }
const fn default_true() -> bool { true }

/// How an analyzer writes its per-contract results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResultFormat {
    /// JSON object with a per-kind warning count.
    Json,
    /// Text/CSV file whose signal is the number of marker occurrences.
    Marker,
}

/// Where the ground truth for a benchmark comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TruthSource {
    /// Directory of `BugLog_<id>.<ext>` files.
    BugLog { buglog: PathBuf },
    /// Vulnerability manifest, optionally remapped through a name index.
    Manifest {
        manifest: PathBuf,
        #[serde(default)]
        index: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerEntry {
    pub label: String,
    #[serde(default = "default_format")]
    pub format: ResultFormat,
    pub results: PathBuf,
    #[serde(default)]
    pub baseline: Option<PathBuf>,
    /// Overrides `scoring.marker_token` for marker-format results.
    #[serde(default)]
    pub marker: Option<String>,
    /// Overrides the kind's default file name filter for marker-format results.
    #[serde(default)]
    pub name_filter: Option<String>,
}

const fn default_format() -> ResultFormat { ResultFormat::Json }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    pub dataset: String,
    pub kind: VulnKind,
    pub truth: TruthSource,
    #[serde(default, rename = "analyzer")]
    pub analyzers: Vec<AnalyzerEntry>,
}

/// `[corrections.<dataset>.<kind>]` tables: problem ID (as a string key) to adjustment.
pub type CorrectionsToml = BTreeMap<String, BTreeMap<String, BTreeMap<String, i64>>>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VulnScoreToml {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub corrections: CorrectionsToml,
    #[serde(default, rename = "benchmark")]
    pub benchmarks: Vec<BenchmarkEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub corrections: CorrectionBook,
    pub benchmarks: Vec<BenchmarkEntry>,
}
