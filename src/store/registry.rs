//! Exercise name → id resolution with create-on-miss.
//!
//! Lookup and insert are not serialized: two sessions may both miss the same
//! name and both try to insert it. The table's UNIQUE constraint lets exactly
//! one of them win; the loser sees a conflict, looks the name up again and
//! uses the winner's id.

use crate::db::queries::{find_exercise_by_name, insert_exercise, load_exercises};
use crate::errors::{AppError, AppResult};
use crate::models::ExerciseRecord;
use rusqlite::Connection;
use uuid::Uuid;

/// Storage seen by the registry. `insert` must report a duplicate name as
/// `AppError::Conflict`.
pub trait ExerciseTable {
    fn find_by_name(&self, name: &str) -> AppResult<Option<ExerciseRecord>>;
    fn insert(&self, name: &str) -> AppResult<ExerciseRecord>;
    fn all(&self) -> AppResult<Vec<ExerciseRecord>>;
}

/// `exercises` table on a SQLite connection.
pub struct SqliteExercises<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteExercises<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl ExerciseTable for SqliteExercises<'_> {
    fn find_by_name(&self, name: &str) -> AppResult<Option<ExerciseRecord>> {
        find_exercise_by_name(self.conn, name)
    }

    fn insert(&self, name: &str) -> AppResult<ExerciseRecord> {
        let id = Uuid::new_v4().to_string();
        insert_exercise(self.conn, &id, name)
    }

    fn all(&self) -> AppResult<Vec<ExerciseRecord>> {
        load_exercises(self.conn)
    }
}

enum Step {
    Lookup,
    Insert,
    RecoverFromConflict(AppError),
    Fatal(AppError),
}

pub struct ExerciseRegistry<T: ExerciseTable> {
    table: T,
}

impl<T: ExerciseTable> ExerciseRegistry<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    /// Return the id of `name`, creating the record when it does not exist yet.
    pub fn resolve(&self, name: &str) -> AppResult<String> {
        let mut step = Step::Lookup;

        loop {
            step = match step {
                Step::Lookup => match self.table.find_by_name(name) {
                    Ok(Some(rec)) => return Ok(rec.id),
                    Ok(None) => Step::Insert,
                    Err(e) => Step::Fatal(e),
                },

                Step::Insert => match self.table.insert(name) {
                    Ok(rec) => return Ok(rec.id),
                    Err(e) if e.is_conflict() => Step::RecoverFromConflict(e),
                    Err(e) => Step::Fatal(e),
                },

                // Someone else inserted the name between our lookup and insert.
                Step::RecoverFromConflict(conflict) => match self.table.find_by_name(name) {
                    Ok(Some(rec)) => return Ok(rec.id),
                    Ok(None) => Step::Fatal(conflict),
                    Err(e) => Step::Fatal(e),
                },

                Step::Fatal(e) => return Err(e),
            };
        }
    }

    pub fn all(&self) -> AppResult<Vec<ExerciseRecord>> {
        self.table.all()
    }
}
