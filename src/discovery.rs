// src/discovery.rs
use crate::error::{Result, ScoreError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Result and ground-truth directories are flat; nested directories are not
/// descended into.
///
/// # Errors
/// Returns error if `dir` itself cannot be read. Unreadable individual
/// entries are counted and skipped.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScoreError::Directory {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    let (paths, error_count) = accumulate_walker(walker)?;
    if error_count > 0 {
        tracing::warn!(dir = %dir.display(), error_count, "entries could not be read");
    }
    Ok(paths)
}

fn accumulate_walker<I>(walker: I) -> Result<(Vec<PathBuf>, usize)>
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            // Depth 0 is the root itself: nothing can be listed.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(_) => errors += 1,
        }
    }
    Ok((paths, errors))
}

/// File name of `path` as UTF-8, or an empty string.
#[must_use]
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}
