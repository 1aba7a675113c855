// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{
    AnalyzerEntry, BenchmarkEntry, Config, ResultFormat, ScoringConfig, TruthSource,
    VulnScoreToml,
};
use crate::error::{Result, ScoreError};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `vulnscore.toml` from the working directory, or `path` when given.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        config.load_file(path.unwrap_or_else(|| Path::new(CONFIG_FILE)))?;
        Ok(config)
    }

    /// Merges a config file into this config.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let parsed = io::read_toml(path)?;
        io::apply_toml(self, parsed)?;
        self.validate()
    }

    /// Merges config text into this config.
    ///
    /// # Errors
    /// Returns error if the text is not valid config.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed = io::parse_toml(content)
            .map_err(|e| ScoreError::Other(format!("invalid config: {e}")))?;
        io::apply_toml(self, parsed)?;
        self.validate()
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error on duplicate benchmark names or a benchmark without analyzers.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for bench in &self.benchmarks {
            if !seen.insert(bench.name.as_str()) {
                return Err(ScoreError::Other(format!(
                    "benchmark '{}' is defined twice",
                    bench.name
                )));
            }
            if bench.analyzers.is_empty() {
                return Err(ScoreError::Other(format!(
                    "benchmark '{}' has no analyzers",
                    bench.name
                )));
            }
        }
        if self.scoring.marker_token.is_empty() {
            return Err(ScoreError::Other("scoring.marker_token is empty".into()));
        }
        Ok(())
    }

    /// Looks up a configured benchmark by name.
    ///
    /// # Errors
    /// Returns `UnknownBenchmark` if no benchmark has that name.
    pub fn benchmark(&self, name: &str) -> Result<&BenchmarkEntry> {
        self.benchmarks
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| ScoreError::UnknownBenchmark(name.to_string()))
    }
}
