// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Cannot read directory {path}: {reason}")]
    Directory { path: PathBuf, reason: String },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid config {path}: {source}")]
    Toml {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScoreError>;

impl ScoreError {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    pub fn json(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        Self::Json {
            source,
            path: path.into(),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for ScoreError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        ScoreError::Directory {
            path,
            reason: e.to_string(),
        }
    }
}
