use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResultFormat;
use crate::types::VulnKind;

#[derive(Parser)]
#[command(
    name = "vulnscore",
    version,
    about = "Score bytecode analyzers against vulnerability ground truth"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./vulnscore.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run benchmarks defined in the config (all when none are named)
    Run {
        names: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Score one analyzer result directory against a ground truth
    Score(ScoreArgs),
    /// Check that every analysis resolved all of its jumps
    Soundness {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Number contract sources to build a file-name index
    Index {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        #[arg(long, short, default_value = "file_index.json")]
        output: PathBuf,
    },
    /// Show the effective ground-truth correction tables
    Corrections {
        #[arg(long)]
        dataset: Option<String>,
        #[arg(long, value_enum)]
        kind: Option<VulnKind>,
    },
}

/// Arguments for an ad hoc scoring run.
#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    /// Dataset name, selects the correction table
    #[arg(long)]
    pub dataset: String,
    #[arg(long, value_enum)]
    pub kind: VulnKind,
    /// Analyzer result directory (buggy corpus)
    #[arg(long, value_name = "DIR")]
    pub results: PathBuf,
    /// Result directory of the clean corpus, subtracted per problem
    #[arg(long, value_name = "DIR")]
    pub baseline: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ResultFormat::Json)]
    pub format: ResultFormat,
    #[arg(long, default_value = "analyzer")]
    pub label: String,
    /// Directory of BugLog_<id> files
    #[arg(long, value_name = "DIR", conflicts_with = "manifest", required_unless_present = "manifest")]
    pub buglog: Option<PathBuf>,
    /// Vulnerability manifest JSON
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
    /// File-name index for manifests with non-numeric names
    #[arg(long, value_name = "FILE", requires = "manifest")]
    pub index: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}
