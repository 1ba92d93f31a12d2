//! Training-log persistence.
//!
//! Every consumer talks to [`LogStore`]. Which implementation sits behind it
//! is decided once, from a [`Backend`] value, when the store is opened.

pub mod aggregate;
pub mod normalized;
pub mod registry;
pub mod snapshot;

pub use normalized::NormalizedStore;
pub use snapshot::SnapshotStore;

use crate::errors::AppResult;
use crate::models::{LogId, TrainingEntry, TrainingLog};
use crate::session::Session;
use std::path::PathBuf;

pub trait LogStore {
    /// Persist a new training log. Errors are meant to be shown to the user.
    fn save(&mut self, entry: &TrainingEntry) -> AppResult<TrainingLog>;

    /// Every log visible to the caller, newest first. Never fails: storage
    /// problems and missing sign-in both yield an empty list.
    fn list(&self) -> Vec<TrainingLog>;

    /// Remove one log (all of its sets). Unknown or malformed ids are ignored.
    /// Returns whether anything was removed; storage failures count as no.
    fn delete(&mut self, id: &LogId) -> bool;

    /// Remove every log visible to the caller.
    fn clear_all(&mut self) -> AppResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Where training logs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Normalized SQLite database, one row per set.
    Normalized { database: String },
    /// Single JSON document holding already-grouped logs.
    Snapshot { file: PathBuf },
}

pub fn open(backend: &Backend, session: Session) -> AppResult<Box<dyn LogStore>> {
    match backend {
        Backend::Normalized { database } => {
            Ok(Box::new(NormalizedStore::open(database, session)?))
        }
        Backend::Snapshot { file } => Ok(Box::new(SnapshotStore::new(file.clone()))),
    }
}
