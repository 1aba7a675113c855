// src/exit.rs
//! Standardized process exit codes for `vulnscore`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScoreExit {
    /// Scoring completed and every input was consistent.
    Success = 0,
    /// Generic error (e.g. IO, config, unreadable result directory).
    Error = 1,
    /// Command-line input could not be resolved (unknown benchmark, bad flags).
    InvalidInput = 2,
    /// A correction table drove a ground-truth count below zero.
    IntegrityViolation = 3,
    /// At least one analysis did not resolve all of its jumps.
    Unsound = 4,
}

impl ScoreExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the more severe of two exit codes.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        if other.code() > self.code() {
            other
        } else {
            self
        }
    }
}

impl Termination for ScoreExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_prefers_higher_code() {
        assert_eq!(
            ScoreExit::Success.worst(ScoreExit::IntegrityViolation),
            ScoreExit::IntegrityViolation
        );
        assert_eq!(
            ScoreExit::Unsound.worst(ScoreExit::Error),
            ScoreExit::Unsound
        );
    }
}
