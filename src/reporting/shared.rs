use crate::types::ScoreMap;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// `{1: 1.000, 5: 0.400}` in key order.
pub(crate) fn score_map_line(scores: &ScoreMap) -> String {
    let parts: Vec<String> = scores
        .iter()
        .map(|(id, v)| format!("{id}: {v:.3}"))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
