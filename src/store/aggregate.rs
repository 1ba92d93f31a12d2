//! Folding of per-set rows into training logs.
//!
//! A log of the normalized backend is identified by the pair
//! `(date, exercise_id)`; its id is the two joined by [`KEY_SEPARATOR`].
//! Neither part can contain the separator: dates are RFC 3339 stamps and
//! exercise ids are UUIDs.

use crate::models::{LogId, StoredSetRow, TrainingLog, TrainingSet};
use crate::utils::time::stamp;
use std::collections::HashMap;

pub const KEY_SEPARATOR: char = '_';

pub fn compose_key(date: &str, exercise_id: &str) -> LogId {
    LogId::new(format!("{date}{KEY_SEPARATOR}{exercise_id}"))
}

/// Inverse of [`compose_key`]. `None` unless the id is exactly two non-empty parts.
pub fn split_key(id: &LogId) -> Option<(&str, &str)> {
    let mut parts = id.as_str().split(KEY_SEPARATOR);
    let date = parts.next()?;
    let exercise_id = parts.next()?;

    if parts.next().is_some() || date.is_empty() || exercise_id.is_empty() {
        return None;
    }
    Some((date, exercise_id))
}

/// Group rows by `(date, exercise_id)`, keeping the order in which keys first
/// appear and the order of sets within each key.
///
/// Rows whose exercise could not be resolved are skipped.
pub fn group_rows(rows: &[StoredSetRow]) -> Vec<TrainingLog> {
    let mut index: HashMap<LogId, usize> = HashMap::new();
    let mut logs: Vec<TrainingLog> = Vec::new();

    for row in rows {
        let Some(name) = row.exercise_name.as_deref() else {
            continue;
        };

        let key = compose_key(&stamp(&row.date), &row.exercise_id);
        let set = TrainingSet::new(row.weight, row.reps);

        match index.get(&key) {
            Some(&pos) => logs[pos].sets.push(set),
            None => {
                index.insert(key.clone(), logs.len());
                logs.push(TrainingLog {
                    id: key,
                    date: row.date,
                    exercise: name.to_string(),
                    sets: vec![set],
                    interval_seconds: None,
                    memo: row.memo.clone(),
                });
            }
        }
    }

    logs
}
