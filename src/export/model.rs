use crate::models::TrainingLog;
use crate::utils::time::stamp;
use serde::Serialize;

/// Flat export row: one per set.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetExport {
    pub log_id: String,
    pub date: String,
    pub exercise: String,
    pub set: usize,
    pub weight: f64,
    pub reps: u32,
    pub interval_seconds: Option<u32>,
    pub memo: Option<String>,
}

/// Flatten logs into per-set rows, set numbers starting at 1.
pub fn flatten(logs: &[TrainingLog]) -> Vec<SetExport> {
    logs.iter()
        .flat_map(|log| {
            log.sets.iter().enumerate().map(move |(i, s)| SetExport {
                log_id: log.id.to_string(),
                date: stamp(&log.date),
                exercise: log.exercise.clone(),
                set: i + 1,
                weight: s.weight,
                reps: s.reps,
                interval_seconds: log.interval_seconds,
                memo: log.memo.clone(),
            })
        })
        .collect()
}
