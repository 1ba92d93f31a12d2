//! Parsing of `WEIGHTxREPS` set notation typed on the command line.

use crate::errors::{AppError, AppResult};
use crate::models::TrainingSet;
use regex::Regex;
use std::sync::LazyLock;

static SET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*(?:kg)?\s*[xX×*]\s*(\d+)\s*$")
        .expect("set pattern is valid")
});

/// `60x8`, `52.5x10`, `52,5 x 10`, `40kg×12`
pub fn parse_set(s: &str) -> AppResult<TrainingSet> {
    let caps = SET_RE
        .captures(s)
        .ok_or_else(|| AppError::InvalidSet(s.to_string()))?;

    let weight: f64 = caps[1]
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidSet(s.to_string()))?;
    let reps: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidSet(s.to_string()))?;

    Ok(TrainingSet::new(weight, reps))
}

pub fn parse_sets(items: &[String]) -> AppResult<Vec<TrainingSet>> {
    items.iter().map(|s| parse_set(s)).collect()
}
