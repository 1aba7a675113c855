// src/cli/handlers/mod.rs
//! Command handlers.

use crate::benchmark::{self, BenchmarkReport};
use crate::cli::args::ScoreArgs;
use crate::config::{AnalyzerEntry, BenchmarkEntry, Config, TruthSource};
use crate::exit::ScoreExit;
use crate::index::FileIndex;
use crate::reporting;
use crate::soundness;
use crate::types::VulnKind;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

/// Handles `run`: scores the named benchmarks, or all of them.
///
/// # Errors
/// Returns error if a benchmark input cannot be read.
pub fn handle_run(config: &Config, names: &[String], json: bool) -> Result<ScoreExit> {
    if config.benchmarks.is_empty() {
        eprintln!(
            "{} no [[benchmark]] entries configured",
            "error:".red().bold()
        );
        return Ok(ScoreExit::InvalidInput);
    }

    let mut selected: Vec<&BenchmarkEntry> = Vec::new();
    for name in names {
        match config.benchmark(name) {
            Ok(b) => selected.push(b),
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                return Ok(ScoreExit::InvalidInput);
            }
        }
    }
    if names.is_empty() {
        selected = config.benchmarks.iter().collect();
    }

    let reports = selected
        .into_iter()
        .map(|b| {
            benchmark::run(b, config).with_context(|| format!("benchmark '{}' failed", b.name))
        })
        .collect::<Result<Vec<_>>>()?;

    emit(&reports, json)
}

/// Handles `score`: one ad hoc analyzer run.
///
/// # Errors
/// Returns error if an input cannot be read.
pub fn handle_score(config: &Config, args: &ScoreArgs) -> Result<ScoreExit> {
    let entry = benchmark_from_args(args)?;
    let report = benchmark::run(&entry, config)?;
    emit(&[report], args.json)
}

fn benchmark_from_args(args: &ScoreArgs) -> Result<BenchmarkEntry> {
    let truth = match (&args.buglog, &args.manifest) {
        (Some(dir), None) => TruthSource::BugLog {
            buglog: dir.clone(),
        },
        (None, Some(manifest)) => TruthSource::Manifest {
            manifest: manifest.clone(),
            index: args.index.clone(),
        },
        _ => bail!("exactly one of --buglog or --manifest is required"),
    };

    Ok(BenchmarkEntry {
        name: format!("{}-{}", args.dataset, args.kind),
        dataset: args.dataset.clone(),
        kind: args.kind,
        truth,
        analyzers: vec![AnalyzerEntry {
            label: args.label.clone(),
            format: args.format,
            results: args.results.clone(),
            baseline: args.baseline.clone(),
            marker: None,
            name_filter: None,
        }],
    })
}

fn emit(reports: &[BenchmarkReport], json: bool) -> Result<ScoreExit> {
    if json {
        reporting::print_json(&reports)?;
    } else {
        for r in reports {
            reporting::print_benchmark(r);
        }
    }
    Ok(exit_for(reports))
}

fn exit_for(reports: &[BenchmarkReport]) -> ScoreExit {
    reports.iter().fold(ScoreExit::Success, |acc, r| {
        let mut code = acc;
        if r.has_integrity_errors() {
            code = code.worst(ScoreExit::IntegrityViolation);
        }
        if !r.is_sound() {
            code = code.worst(ScoreExit::Unsound);
        }
        code
    })
}

/// Handles `soundness`.
///
/// # Errors
/// Returns error if the directory cannot be listed.
pub fn handle_soundness(dir: &Path, json: bool) -> Result<ScoreExit> {
    let report = soundness::check(dir)?;
    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_soundness(&report);
    }
    Ok(if report.is_sound() {
        ScoreExit::Success
    } else {
        ScoreExit::Unsound
    })
}

/// Handles `index`.
///
/// # Errors
/// Returns error if the folder cannot be listed or the index cannot be written.
pub fn handle_index(dir: &Path, output: &Path) -> Result<ScoreExit> {
    let index = FileIndex::generate(dir)?;
    index.save(output)?;
    println!(
        "{} {} sources indexed into {}",
        "ok:".green(),
        index.len(),
        output.display()
    );
    Ok(ScoreExit::Success)
}

/// Handles `corrections`.
pub fn handle_corrections(config: &Config, dataset: Option<&str>, kind: Option<VulnKind>) -> ScoreExit {
    reporting::print_corrections(&config.corrections, dataset, kind);
    ScoreExit::Success
}
