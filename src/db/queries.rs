use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseRecord, StoredSetRow, TrainingSet};
use crate::ui::messages::warning;
use crate::utils::time::parse_stamp;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, TransactionBehavior, params};

// ---------------------------------------------------------------------------
// training_history
// ---------------------------------------------------------------------------

/// `None` when the stored date is not a timestamp we can read; such a row is
/// skipped like a dangling one instead of failing the whole load.
pub fn map_row(row: &Row) -> Result<Option<StoredSetRow>> {
    let row_id: i64 = row.get("id")?;
    let date_str: String = row.get("date")?;
    let Some(date) = parse_stamp(&date_str) else {
        warning(format!(
            "Skipping training_history row {}: unreadable date '{}'",
            row_id, date_str
        ));
        return Ok(None);
    };

    Ok(Some(StoredSetRow {
        row_id,
        user_id: row.get("user_id")?,
        exercise_id: row.get("exercise_id")?,
        date,
        weight: row.get("weight")?,
        reps: row.get("reps")?,
        memo: row.get("memo")?,
        exercise_name: row.get("exercise_name")?,
    }))
}

/// All set rows of one user, newest session first, sets in insertion order.
pub fn load_rows_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<StoredSetRow>> {
    let mut stmt = conn.prepare(
        "SELECT th.id, th.user_id, th.exercise_id, th.date, th.weight, th.reps, th.memo,
                ex.name AS exercise_name
         FROM training_history th
         LEFT JOIN exercises ex ON ex.id = th.exercise_id
         WHERE th.user_id = ?1
         ORDER BY th.date DESC, th.id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(row) = r? {
            out.push(row);
        }
    }
    Ok(out)
}

/// Insert one row per set in a single transaction: either every set lands or none does.
pub fn insert_set_rows(
    conn: &mut Connection,
    user_id: &str,
    exercise_id: &str,
    date: &str,
    sets: &[TrainingSet],
    memo: Option<&str>,
) -> AppResult<usize> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO training_history (user_id, exercise_id, date, weight, reps, memo)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for set in sets {
            stmt.execute(params![user_id, exercise_id, date, set.weight, set.reps, memo])?;
        }
    }
    tx.commit()?;
    Ok(sets.len())
}

pub fn delete_rows_by_key(
    conn: &Connection,
    user_id: &str,
    date: &str,
    exercise_id: &str,
) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM training_history
         WHERE user_id = ?1 AND date = ?2 AND exercise_id = ?3",
        params![user_id, date, exercise_id],
    )?;
    Ok(n)
}

pub fn delete_rows_for_user(conn: &Connection, user_id: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM training_history WHERE user_id = ?1",
        [user_id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// exercises
// ---------------------------------------------------------------------------

fn map_exercise(row: &Row) -> Result<ExerciseRecord> {
    Ok(ExerciseRecord {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn find_exercise_by_name(conn: &Connection, name: &str) -> AppResult<Option<ExerciseRecord>> {
    let found = conn
        .query_row(
            "SELECT id, name FROM exercises WHERE name = ?1",
            [name],
            map_exercise,
        )
        .optional()?;
    Ok(found)
}

/// Insert a new exercise. A UNIQUE violation on `name` comes back as
/// `AppError::Conflict` so the registry can recover from it.
pub fn insert_exercise(conn: &Connection, id: &str, name: &str) -> AppResult<ExerciseRecord> {
    match conn.execute(
        "INSERT INTO exercises (id, name) VALUES (?1, ?2)",
        params![id, name],
    ) {
        Ok(_) => Ok(ExerciseRecord {
            id: id.to_string(),
            name: name.to_string(),
        }),
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(format!(
            "exercise '{}' already exists ({})",
            name, e
        ))),
        Err(e) => Err(e.into()),
    }
}

pub fn load_exercises(conn: &Connection) -> AppResult<Vec<ExerciseRecord>> {
    let mut stmt = conn.prepare("SELECT id, name FROM exercises ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_exercise)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    match e {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == ErrorCode::ConstraintViolation
                && (err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        }
        _ => false,
    }
}
