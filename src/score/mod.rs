// src/score/mod.rs
//! Precision, recall and F-measure over sparse per-problem counts.
//!
//! Only problems present in the observed map are scored. A problem missing
//! from the truth map has a truth of zero.
//!
//! Precision and recall are computed by two separate passes that disagree on
//! how to credit under-reporting: precision takes no true positives, recall
//! takes every observed count as a true positive. They are intentionally not
//! derived from one shared confusion triple.

pub mod summary;

pub use summary::ScoreSummary;

use crate::types::{CountMap, ScoreMap};

/// Removes the baseline signal from a buggy-corpus observation.
///
/// Keys present only in `baseline` are dropped. The result may be negative.
#[must_use]
pub fn subtract(buggy: &CountMap, baseline: &CountMap) -> CountMap {
    buggy
        .iter()
        .map(|(id, count)| (id, count - baseline.count(id)))
        .collect()
}

/// True/false positive and false negative counts for one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Confusion {
    pub tp: i64,
    pub fp: i64,
    pub fn_: i64,
}

impl Confusion {
    /// Counts used by the precision pass.
    #[must_use]
    pub fn for_precision(observed: i64, truth: i64) -> Self {
        Self::classify(observed, truth, 0)
    }

    /// Counts used by the recall pass.
    #[must_use]
    pub fn for_recall(observed: i64, truth: i64) -> Self {
        Self::classify(observed, truth, observed)
    }

    fn classify(observed: i64, truth: i64, under_tp: i64) -> Self {
        let diff = observed - truth;
        match diff.signum() {
            0 => Self {
                tp: observed,
                ..Self::default()
            },
            1 => Self {
                tp: truth,
                fp: diff,
                fn_: 0,
            },
            _ => Self {
                tp: under_tp,
                fp: 0,
                fn_: -diff,
            },
        }
    }

    #[must_use]
    pub fn precision(self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    #[must_use]
    pub fn recall(self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(num: i64, den: i64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Per-problem precision of `data` against `truth`.
#[must_use]
pub fn precision(data: &CountMap, truth: &CountMap) -> ScoreMap {
    data.iter()
        .map(|(id, observed)| {
            let c = Confusion::for_precision(observed, truth.count(id));
            (id, c.precision())
        })
        .collect()
}

/// Per-problem recall of `data` against `truth`.
#[must_use]
pub fn recall(data: &CountMap, truth: &CountMap) -> ScoreMap {
    data.iter()
        .map(|(id, observed)| {
            let c = Confusion::for_recall(observed, truth.count(id));
            (id, c.recall())
        })
        .collect()
}

/// Harmonic mean of precision and recall for each key of `precision`.
/// A key missing from `recall` is taken as recall zero.
#[must_use]
pub fn f_measure(precision: &ScoreMap, recall: &ScoreMap) -> ScoreMap {
    precision
        .iter()
        .map(|(id, p)| {
            let r = recall.get(id).copied().unwrap_or(0.0);
            let f = if p + r == 0.0 {
                0.0
            } else {
                2.0 * (p * r) / (p + r)
            };
            (*id, f)
        })
        .collect()
}

/// Unweighted mean over present keys. Zero for an empty map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(scores: &ScoreMap) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.values().sum::<f64>() / scores.len() as f64
}
