//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_corrections, handle_index, handle_run, handle_score, handle_soundness},
};
use crate::config::Config;
use crate::exit::ScoreExit;
use anyhow::{Context, Result};
use std::path::Path;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the config is malformed or the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<ScoreExit> {
    match command {
        Commands::Soundness { dir, json } => handle_soundness(&dir, json),
        Commands::Index { dir, output } => handle_index(&dir, &output),
        Commands::Run { .. } | Commands::Score(_) | Commands::Corrections { .. } => {
            let config = Config::load(config_path).context("failed to load config")?;
            handle_configured(command, &config)
        }
    }
}

fn handle_configured(command: Commands, config: &Config) -> Result<ScoreExit> {
    match command {
        Commands::Run { names, json } => handle_run(config, &names, json),
        Commands::Score(args) => handle_score(config, &args),
        Commands::Corrections { dataset, kind } => {
            Ok(handle_corrections(config, dataset.as_deref(), kind))
        }
        Commands::Soundness { .. } | Commands::Index { .. } => {
            Err(anyhow::anyhow!("Internal error: command needs no config"))
        }
    }
}
