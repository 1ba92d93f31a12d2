//! LogStore over the normalized SQLite schema (`exercises` + `training_history`).

use super::LogStore;
use super::aggregate::{compose_key, group_rows, split_key};
use super::registry::{ExerciseRegistry, SqliteExercises};
use crate::db::initialize::init_db;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_rows_by_key, delete_rows_for_user, insert_set_rows, load_rows_for_user,
};
use crate::errors::AppResult;
use crate::models::{ExerciseRecord, LogId, TrainingEntry, TrainingLog};
use crate::session::Session;
use crate::ui::messages::warning;
use crate::utils::time;
use rusqlite::Connection;

pub struct NormalizedStore {
    pool: DbPool,
    session: Session,
}

impl NormalizedStore {
    /// Open (and if needed create) the database at `path`.
    pub fn open(path: &str, session: Session) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn registry(&self) -> ExerciseRegistry<SqliteExercises<'_>> {
        ExerciseRegistry::new(SqliteExercises::new(&self.pool.conn))
    }

    pub fn exercises(&self) -> AppResult<Vec<ExerciseRecord>> {
        self.registry().all()
    }
}

impl LogStore for NormalizedStore {
    fn save(&mut self, entry: &TrainingEntry) -> AppResult<TrainingLog> {
        let user_id = self.session.require_user()?.to_string();
        entry.validate()?;

        let exercise_id = self.registry().resolve(&entry.exercise)?;

        // every set of this batch shares one timestamp
        let date = time::now();
        let date_str = time::stamp(&date);

        let written = insert_set_rows(
            &mut self.pool.conn,
            &user_id,
            &exercise_id,
            &date_str,
            &entry.sets,
            entry.memo.as_deref(),
        )?;

        let id = compose_key(&date_str, &exercise_id);
        audit_quiet(
            &self.pool.conn,
            "add",
            &entry.exercise,
            &format!("{} set(s) saved as {}", written, id),
        );

        Ok(TrainingLog::from_entry(id, date, entry))
    }

    fn list(&self) -> Vec<TrainingLog> {
        let Some(user_id) = self.session.user_id() else {
            return Vec::new();
        };

        match load_rows_for_user(&self.pool.conn, user_id) {
            Ok(rows) => group_rows(&rows),
            Err(e) => {
                warning(format!("Failed to load training history: {}", e));
                Vec::new()
            }
        }
    }

    fn delete(&mut self, id: &LogId) -> bool {
        let Some(user_id) = self.session.user_id() else {
            return false;
        };
        let Some((date, exercise_id)) = split_key(id) else {
            return false;
        };

        match delete_rows_by_key(&self.pool.conn, user_id, date, exercise_id) {
            Ok(0) => false,
            Ok(n) => {
                audit_quiet(
                    &self.pool.conn,
                    "del",
                    id.as_str(),
                    &format!("{} set(s) deleted", n),
                );
                true
            }
            Err(e) => {
                warning(format!("Failed to delete training log {}: {}", id, e));
                false
            }
        }
    }

    fn clear_all(&mut self) -> AppResult<()> {
        let Some(user_id) = self.session.user_id() else {
            return Ok(());
        };

        let n = delete_rows_for_user(&self.pool.conn, user_id)?;
        audit_quiet(
            &self.pool.conn,
            "clear",
            user_id,
            &format!("{} set(s) deleted", n),
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
