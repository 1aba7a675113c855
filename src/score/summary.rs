// src/score/summary.rs
use super::{average, f_measure, precision, recall};
use crate::types::{CountMap, ProblemId, ScoreMap};
use serde::Serialize;

/// Scores of one observation against the ground truth.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreSummary {
    pub precision: ScoreMap,
    pub recall: ScoreMap,
    pub f_measure: ScoreMap,
    pub avg_precision: f64,
    pub avg_recall: f64,
    pub avg_f_measure: f64,
    /// Problems whose differential count went below zero.
    pub negative: Vec<ProblemId>,
    /// Problems with ground truth but no observation; never scored.
    pub unscored: Vec<ProblemId>,
}

impl ScoreSummary {
    /// Scores `observed` against `truth`.
    ///
    /// With `clamp_negative` set, negative observed counts are scored as zero.
    /// They are listed in `negative` either way.
    #[must_use]
    pub fn compute(observed: &CountMap, truth: &CountMap, clamp_negative: bool) -> Self {
        let negative: Vec<ProblemId> = observed
            .iter()
            .filter(|(_, count)| *count < 0)
            .map(|(id, _)| id)
            .collect();
        let unscored = truth.keys().filter(|id| !observed.contains(*id)).collect();

        let scored = if clamp_negative && !negative.is_empty() {
            observed.iter().map(|(id, c)| (id, c.max(0))).collect()
        } else {
            observed.clone()
        };

        let precision = precision(&scored, truth);
        let recall = recall(&scored, truth);
        let f_measure = f_measure(&precision, &recall);

        Self {
            avg_precision: average(&precision),
            avg_recall: average(&recall),
            avg_f_measure: average(&f_measure),
            precision,
            recall,
            f_measure,
            negative,
            unscored,
        }
    }
}
