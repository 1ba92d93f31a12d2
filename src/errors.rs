//! Unified application error type.
//! Every layer (store, db, cli, utils) returns AppError so that write paths
//! can surface a single human-readable message to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Unique-name race on the exercise registry. Recovered internally.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Not signed in: set `user` in the configuration or pass --user")]
    Unauthenticated,

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid training entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid set '{0}': expected WEIGHTxREPS, e.g. 60x8 or 52.5x10")]
    InvalidSet(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
