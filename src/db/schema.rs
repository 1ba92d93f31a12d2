use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` (audit) table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Global exercise master data. Names are unique and case-sensitive.
fn ensure_exercises_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS exercises (
            id   TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );
        "#,
    )?;
    Ok(())
}

/// One row per set. A training log is every row sharing (user_id, date, exercise_id).
fn ensure_training_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS training_history (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            exercise_id TEXT NOT NULL REFERENCES exercises(id),
            date        TEXT NOT NULL,
            weight      REAL NOT NULL CHECK(weight >= 0),
            reps        INTEGER NOT NULL CHECK(reps >= 0),
            memo        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_training_history_user_date
            ON training_history(user_id, date DESC);
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every table the normalized backend needs. Idempotent.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_exercises_table(conn)?;
    ensure_training_history_table(conn)?;
    Ok(())
}
