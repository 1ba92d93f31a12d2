use super::log_id::LogId;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One set: weight (kg by default) × repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub weight: f64,
    pub reps: u32,
}

impl TrainingSet {
    pub fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }

    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Draft of a training session, as typed by the user before saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    pub exercise: String,
    pub sets: Vec<TrainingSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TrainingEntry {
    pub fn new(exercise: impl Into<String>, sets: Vec<TrainingSet>) -> Self {
        Self {
            exercise: exercise.into(),
            sets,
            interval_seconds: None,
            memo: None,
        }
    }

    pub fn with_interval(mut self, seconds: u32) -> Self {
        self.interval_seconds = Some(seconds);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Reject entries that could never form a valid saved log.
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise.trim().is_empty() {
            return Err(AppError::InvalidEntry("exercise name is empty".into()));
        }

        if self.sets.is_empty() {
            return Err(AppError::InvalidEntry("at least one set is required".into()));
        }

        for (i, set) in self.sets.iter().enumerate() {
            if !set.weight.is_finite() || set.weight < 0.0 {
                return Err(AppError::InvalidEntry(format!(
                    "set #{} has an invalid weight ({})",
                    i + 1,
                    set.weight
                )));
            }
        }

        if self.interval_seconds == Some(0) {
            return Err(AppError::InvalidEntry(
                "interval must be a positive number of seconds".into(),
            ));
        }

        Ok(())
    }
}

/// A saved exercise session: one exercise, its sets, and when it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLog {
    pub id: LogId,
    pub date: DateTime<Utc>,
    pub exercise: String,
    pub sets: Vec<TrainingSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TrainingLog {
    /// Build a log from a validated entry. The id and timestamp are issued by the store.
    pub fn from_entry(id: LogId, date: DateTime<Utc>, entry: &TrainingEntry) -> Self {
        Self {
            id,
            date,
            exercise: entry.exercise.clone(),
            sets: entry.sets.clone(),
            interval_seconds: entry.interval_seconds,
            memo: entry.memo.clone(),
        }
    }

    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }

    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).sum()
    }

    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(TrainingSet::volume).sum()
    }

    /// Calendar day of the session in the local timezone.
    pub fn local_day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}
