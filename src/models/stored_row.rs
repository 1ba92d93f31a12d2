//! Storage-native row of the normalized backend.
//! Only the store reads these; everything else sees `TrainingLog`.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSetRow {
    pub row_id: i64,                   // ⇔ training_history.id (INTEGER, insertion order)
    pub user_id: String,               // ⇔ training_history.user_id
    pub exercise_id: String,           // ⇔ training_history.exercise_id (FK exercises.id)
    pub date: DateTime<Utc>,           // ⇔ training_history.date (TEXT, RFC 3339 µs UTC)
    pub weight: f64,                   // ⇔ training_history.weight (REAL)
    pub reps: u32,                     // ⇔ training_history.reps (INTEGER)
    pub memo: Option<String>,          // ⇔ training_history.memo (TEXT NULL)
    pub exercise_name: Option<String>, // ⇔ exercises.name via LEFT JOIN, None when dangling
}
