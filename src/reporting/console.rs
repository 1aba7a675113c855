use crate::benchmark::{AnalyzerReport, BenchmarkReport};
use crate::corrections::CorrectionBook;
use crate::loader::LoadReport;
use crate::soundness::SoundnessReport;
use crate::types::{ScoreMap, VulnKind};
use colored::Colorize;

use super::shared::{percent, pluralize, score_map_line};

/// Prints a benchmark report to stdout.
pub fn print_benchmark(report: &BenchmarkReport) {
    println!(
        "{} {} ({}, {})",
        "==>".blue().bold(),
        report.name.bold(),
        report.dataset,
        report.kind
    );
    print_load("truth", &report.truth);

    for analyzer in &report.analyzers {
        print_analyzer(analyzer);
    }
    println!();
}

fn print_load(role: &str, load: &LoadReport) {
    println!(
        "  {} [{}] {} {} matched of {} seen",
        role.cyan(),
        load.label,
        load.matched,
        pluralize("file", load.matched),
        load.seen
    );
    println!("    {}", load.counts.to_string().dimmed());
    for d in &load.diagnostics {
        if d.is_integrity() {
            println!("    {} {d}", "error:".red().bold());
        } else {
            println!("    {} {d}", "warn:".yellow());
        }
    }
}

fn print_analyzer(a: &AnalyzerReport) {
    println!();
    println!("  {} {}", "analyzer".cyan(), a.label.bold());
    print_load("buggy", &a.buggy);
    if let Some(baseline) = &a.baseline {
        print_load("baseline", baseline);
        println!("    {} {}", "observed:".dimmed(), a.observed.to_string().dimmed());
    }

    if !a.summary.negative.is_empty() {
        let ids: Vec<String> = a.summary.negative.iter().map(ToString::to_string).collect();
        println!(
            "    {} baseline exceeds buggy count for {}",
            "note:".yellow(),
            ids.join(", ")
        );
    }
    if !a.summary.unscored.is_empty() {
        println!(
            "    {} {} truth {} without observations",
            "note:".dimmed(),
            a.summary.unscored.len(),
            pluralize("problem", a.summary.unscored.len())
        );
    }

    for s in &a.soundness {
        print_soundness(s);
    }

    print_scores("precision", &a.summary.precision, a.summary.avg_precision);
    print_scores("recall", &a.summary.recall, a.summary.avg_recall);
    print_scores("f-measure", &a.summary.f_measure, a.summary.avg_f_measure);
}

fn print_scores(name: &str, scores: &ScoreMap, avg: f64) {
    println!(
        "    {:<10} {} {}",
        format!("{name}:"),
        format!("{avg:.4}").green().bold(),
        format!("(avg. over {}, {})", scores.len(), percent(avg)).dimmed()
    );
    if !scores.is_empty() {
        println!("      {}", score_map_line(scores).dimmed());
    }
}

/// Prints a soundness check result.
pub fn print_soundness(report: &SoundnessReport) {
    if report.is_sound() {
        println!(
            "    {} all {} analyses in {} are sound",
            "ok:".green(),
            report.checked,
            report.dir.display()
        );
        return;
    }
    println!(
        "    {} {} of {} analyses in {} are unsound",
        "warn:".yellow().bold(),
        report.unsound.len(),
        report.checked,
        report.dir.display()
    );
    for u in &report.unsound {
        println!(
            "      {} solved-jumps-percent: {}",
            u.file.display(),
            u.solved_jumps
        );
    }
    for d in &report.diagnostics {
        println!("      {} {d}", "warn:".yellow());
    }
}

/// Prints the effective correction tables, optionally filtered.
pub fn print_corrections(book: &CorrectionBook, dataset: Option<&str>, kind: Option<VulnKind>) {
    let mut any = false;
    for (d, k, table) in book.iter() {
        if dataset.is_some_and(|want| want != d) || kind.is_some_and(|want| want != k) {
            continue;
        }
        any = true;
        println!("{} {d} / {k} ({})", "==>".blue().bold(), table.version);
        let entries: Vec<String> = table
            .entries
            .iter()
            .map(|(id, adj)| format!("{id}: {adj}"))
            .collect();
        println!("    {{{}}}", entries.join(", "));
    }
    if !any {
        println!("{}", "No correction tables match.".dimmed());
    }
}
