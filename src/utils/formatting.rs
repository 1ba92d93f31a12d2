//! Formatting utilities used for CLI and export outputs.

use crate::models::{TrainingLog, TrainingSet};

/// `50`, `52.5`: whole numbers print without a trailing `.0`.
pub fn fmt_weight(w: f64) -> String {
    if w.fract() == 0.0 {
        format!("{}", w as i64)
    } else {
        let s = format!("{:.2}", w);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// `60kg × 8`
pub fn fmt_set(set: &TrainingSet, unit: &str) -> String {
    format!("{}{} × {}", fmt_weight(set.weight), unit, set.reps)
}

pub fn fmt_sets(log: &TrainingLog, unit: &str) -> String {
    log.sets
        .iter()
        .map(|s| fmt_set(s, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `1m30s`, `45s`, `2m`
pub fn fmt_interval(seconds: u32) -> String {
    let (m, s) = (seconds / 60, seconds % 60);
    match (m, s) {
        (0, s) => format!("{}s", s),
        (m, 0) => format!("{}m", m),
        (m, s) => format!("{}m{:02}s", m, s),
    }
}
