// src/config/io.rs
use super::types::{Config, VulnScoreToml};
use crate::error::{Result, ScoreError};
use crate::types::VulnKind;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "vulnscore.toml";

/// Reads and parses a config file. A missing file yields defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn read_toml(path: &Path) -> Result<VulnScoreToml> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(VulnScoreToml::default());
    }
    let content = fs::read_to_string(path).map_err(|e| ScoreError::io(e, path))?;
    parse_toml(&content).map_err(|source| ScoreError::Toml {
        source,
        path: path.to_path_buf(),
    })
}

/// Parses config text.
///
/// # Errors
/// Returns the TOML decoding error.
pub fn parse_toml(content: &str) -> std::result::Result<VulnScoreToml, toml::de::Error> {
    toml::from_str(content)
}

/// Moves a parsed file into `config`, merging correction overrides over the
/// built-in tables.
///
/// # Errors
/// Returns error if a correction table names an unknown kind or a
/// non-numeric problem ID.
pub fn apply_toml(config: &mut Config, parsed: VulnScoreToml) -> Result<()> {
    config.scoring = parsed.scoring;
    config.benchmarks = parsed.benchmarks;

    for (dataset, kinds) in &parsed.corrections {
        for (kind_name, entries) in kinds {
            let kind = VulnKind::parse(kind_name).ok_or_else(|| {
                ScoreError::Other(format!(
                    "corrections.{dataset}: unknown vulnerability kind '{kind_name}'"
                ))
            })?;
            for (id, adjustment) in entries {
                let id = id.trim().parse().map_err(|_| {
                    ScoreError::Other(format!(
                        "corrections.{dataset}.{kind_name}: '{id}' is not a problem ID"
                    ))
                })?;
                config.corrections.set(dataset, kind, id, *adjustment);
            }
        }
    }
    Ok(())
}
