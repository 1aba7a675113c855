// src/benchmark.rs
//! End-to-end scoring of one benchmark: ground truth, then each analyzer's
//! (optionally baseline-subtracted) observation, then scores.

use crate::config::{AnalyzerEntry, BenchmarkEntry, Config, ResultFormat, TruthSource};
use crate::corrections::CorrectionBook;
use crate::error::Result;
use crate::index::FileIndex;
use crate::loader::{self, LoadReport, ResultSpec, StemResolution};
use crate::score::{self, ScoreSummary};
use crate::soundness::{self, SoundnessReport};
use crate::types::{CountMap, VulnKind};
use serde::Serialize;

/// Scores of one analyzer on one benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerReport {
    pub label: String,
    pub format: ResultFormat,
    /// Counts that were scored (buggy minus baseline when a baseline is set).
    pub observed: CountMap,
    pub buggy: LoadReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<LoadReport>,
    pub summary: ScoreSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub soundness: Vec<SoundnessReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub name: String,
    pub dataset: String,
    pub kind: VulnKind,
    pub truth: LoadReport,
    pub analyzers: Vec<AnalyzerReport>,
}

impl BenchmarkReport {
    #[must_use]
    pub fn has_integrity_errors(&self) -> bool {
        self.truth.has_integrity_errors()
    }

    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.analyzers
            .iter()
            .flat_map(|a| &a.soundness)
            .all(SoundnessReport::is_sound)
    }
}

/// Loads the ground truth of a benchmark.
///
/// # Errors
/// Returns error if the truth directory, manifest, or index is unreadable.
pub fn load_truth(
    source: &TruthSource,
    dataset: &str,
    kind: VulnKind,
    corrections: &CorrectionBook,
) -> Result<LoadReport> {
    match source {
        TruthSource::BugLog { buglog } => {
            let table = corrections.table(dataset, kind);
            loader::load_bug_logs(buglog, &table, dataset)
        }
        TruthSource::Manifest { manifest, index } => match index {
            Some(index_path) => {
                let index = FileIndex::load(index_path)?;
                loader::load_manifest(manifest, StemResolution::Indexed(&index), dataset)
            }
            None => loader::load_manifest(manifest, StemResolution::Numeric, dataset),
        },
    }
}

/// Runs one configured benchmark.
///
/// # Errors
/// Returns error if any top-level input (truth, result or baseline
/// directory) cannot be read.
pub fn run(entry: &BenchmarkEntry, config: &Config) -> Result<BenchmarkReport> {
    tracing::info!(benchmark = %entry.name, kind = %entry.kind, "scoring");
    let truth = load_truth(&entry.truth, &entry.dataset, entry.kind, &config.corrections)?;

    let analyzers = entry
        .analyzers
        .iter()
        .map(|a| run_analyzer(a, entry, &truth.counts, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(BenchmarkReport {
        name: entry.name.clone(),
        dataset: entry.dataset.clone(),
        kind: entry.kind,
        truth,
        analyzers,
    })
}

fn result_spec(analyzer: &AnalyzerEntry, kind: VulnKind, config: &Config) -> ResultSpec {
    match analyzer.format {
        ResultFormat::Json => ResultSpec::json(kind),
        ResultFormat::Marker => {
            let marker = analyzer
                .marker
                .as_deref()
                .unwrap_or(&config.scoring.marker_token);
            let mut spec = ResultSpec::marker(kind, marker);
            if let Some(filter) = &analyzer.name_filter {
                spec.name_filter.clone_from(filter);
            }
            spec
        }
    }
}

fn run_analyzer(
    analyzer: &AnalyzerEntry,
    entry: &BenchmarkEntry,
    truth: &CountMap,
    config: &Config,
) -> Result<AnalyzerReport> {
    let spec = result_spec(analyzer, entry.kind, config);
    let buggy_label = format!("{}-buggy-{}", analyzer.label, entry.dataset);
    let buggy = loader::load_results(&analyzer.results, &spec, &buggy_label)?;

    let baseline = match &analyzer.baseline {
        Some(dir) => {
            let label = format!("{}-vanilla-{}", analyzer.label, entry.dataset);
            Some(loader::load_results(dir, &spec, &label)?)
        }
        None => None,
    };

    let observed = match &baseline {
        Some(b) => score::subtract(&buggy.counts, &b.counts),
        None => buggy.counts.clone(),
    };

    let soundness = if analyzer.format == ResultFormat::Json {
        let mut checks = vec![soundness::check(&analyzer.results)?];
        if let Some(dir) = &analyzer.baseline {
            checks.push(soundness::check(dir)?);
        }
        checks
    } else {
        Vec::new()
    };

    let summary = ScoreSummary::compute(&observed, truth, config.scoring.clamp_negative_observed);

    Ok(AnalyzerReport {
        label: analyzer.label.clone(),
        format: analyzer.format,
        observed,
        buggy,
        baseline,
        summary,
        soundness,
    })
}
