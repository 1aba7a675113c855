// src/soundness.rs
//! Soundness check over primary-analyzer results.
//!
//! An analysis is sound when it resolved every jump (`1`) or had no jumps to
//! resolve (`-1`). Anything else means the reported counts may be incomplete.

use crate::discovery;
use crate::error::Result;
use crate::loader::{strip_jvm_banner, Diagnostic};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const SOLVED_JUMPS_KEY: &str = "solved-jumps-percent";

#[derive(Debug, Clone, Serialize)]
pub struct UnsoundFile {
    pub file: PathBuf,
    pub solved_jumps: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SoundnessReport {
    pub dir: PathBuf,
    pub checked: usize,
    pub unsound: Vec<UnsoundFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SoundnessReport {
    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.unsound.is_empty()
    }
}

enum Verdict {
    Sound,
    Unsound(f64),
    Skipped(Diagnostic),
}

/// Checks every `.json` result in `dir`.
///
/// # Errors
/// Returns error only if `dir` cannot be listed.
pub fn check(dir: &Path) -> Result<SoundnessReport> {
    let files: Vec<PathBuf> = discovery::list_files(dir)?
        .into_iter()
        .filter(|p| discovery::file_name(p).ends_with(".json"))
        .collect();

    let verdicts: Vec<(PathBuf, Verdict)> = files
        .par_iter()
        .map(|p| (p.clone(), judge(p)))
        .collect();

    let mut report = SoundnessReport {
        dir: dir.to_path_buf(),
        ..SoundnessReport::default()
    };
    for (file, verdict) in verdicts {
        report.checked += 1;
        match verdict {
            Verdict::Sound => {}
            Verdict::Unsound(solved_jumps) => {
                tracing::warn!(file = %file.display(), solved_jumps, "unsound analysis");
                report.unsound.push(UnsoundFile { file, solved_jumps });
            }
            Verdict::Skipped(d) => {
                tracing::warn!("{d}");
                report.diagnostics.push(d);
            }
        }
    }
    Ok(report)
}

fn judge(path: &Path) -> Verdict {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|c| {
            serde_json::from_str::<Value>(&strip_jvm_banner(&c)).map_err(|e| e.to_string())
        });
    let value = match parsed {
        Ok(v) => v,
        Err(reason) => {
            return Verdict::Skipped(Diagnostic::Malformed {
                file: path.to_path_buf(),
                reason,
            })
        }
    };

    match value.get(SOLVED_JUMPS_KEY).and_then(Value::as_f64) {
        Some(v) if is_sound_value(v) => Verdict::Sound,
        Some(v) => Verdict::Unsound(v),
        None => Verdict::Skipped(Diagnostic::MissingField {
            file: path.to_path_buf(),
            field: SOLVED_JUMPS_KEY.to_string(),
        }),
    }
}

#[allow(clippy::float_cmp)]
fn is_sound_value(v: f64) -> bool {
    v == 1.0 || v == -1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_values() {
        assert!(is_sound_value(1.0));
        assert!(is_sound_value(-1.0));
        assert!(!is_sound_value(0.97));
        assert!(!is_sound_value(0.0));
    }

    #[test]
    fn mixed_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1-r.json"), r#"{"solved-jumps-percent": 1}"#).unwrap();
        fs::write(dir.path().join("2-r.json"), r#"{"solved-jumps-percent": 0.5}"#).unwrap();
        fs::write(dir.path().join("3-r.json"), r"{}").unwrap();
        fs::write(dir.path().join("4-r.json"), "not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(
            dir.path().join("5-r.json"),
            "Picked up _JAVA_OPTIONS: -Xmx4g\n{\"solved-jumps-percent\": -1}",
        )
        .unwrap();

        let report = check(dir.path()).unwrap();
        assert_eq!(report.checked, 5);
        assert!(!report.is_sound());
        assert_eq!(report.unsound.len(), 1);
        assert!(report.unsound[0].file.ends_with("2-r.json"));
        assert_eq!(report.diagnostics.len(), 2);
    }
}
