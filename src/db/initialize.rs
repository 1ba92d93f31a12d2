use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Safe to call on every open: all statements are `IF NOT EXISTS`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_schema(conn)?;
    Ok(())
}
