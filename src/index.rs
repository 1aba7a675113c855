// src/index.rs
//! File-name index: maps contract source stems to problem IDs.
//!
//! Datasets whose contracts are named by address or title instead of by
//! number get an index when they are prepared. Sources are numbered from 1
//! in file-name order.

use crate::discovery;
use crate::error::{Result, ScoreError};
use crate::types::ProblemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SOURCE_EXT: &str = "sol";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileIndex(BTreeMap<String, ProblemId>);

impl FileIndex {
    /// Numbers every `.sol` file in `folder` by sorted file name.
    ///
    /// # Errors
    /// Returns error if the folder cannot be listed.
    pub fn generate(folder: &Path) -> Result<Self> {
        let mut sources: Vec<PathBuf> = discovery::list_files(folder)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|e| e == SOURCE_EXT))
            .collect();
        // Full names, not stems: `Bank-v2.sol` sorts before `Bank.sol`.
        sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut map = BTreeMap::new();
        let stems = sources
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()));
        for (stem, id) in stems.zip(1..) {
            map.insert(stem.to_string(), id);
        }
        Ok(Self(map))
    }

    /// Reads an index previously written by [`FileIndex::save`].
    ///
    /// # Errors
    /// Returns error if the file is unreadable or not a stem-to-ID object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScoreError::io(e, path))?;
        serde_json::from_str(&content).map_err(|e| ScoreError::json(e, path))
    }

    /// Writes the index as pretty JSON.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| ScoreError::json(e, path))?;
        fs::write(path, text).map_err(|e| ScoreError::io(e, path))
    }

    #[must_use]
    pub fn get(&self, stem: &str) -> Option<ProblemId> {
        self.0.get(stem).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ProblemId)> for FileIndex {
    fn from_iter<I: IntoIterator<Item = (String, ProblemId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
