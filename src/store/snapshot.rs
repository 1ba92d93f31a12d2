//! Flat, single-writer backend: the whole list of training logs is one JSON
//! value stored under a namespaced key of a small key/value document on disk.

use super::LogStore;
use crate::errors::AppResult;
use crate::models::{LogId, TrainingEntry, TrainingLog};
use crate::ui::messages::warning;
use crate::utils::time;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const STORAGE_KEY: &str = "trelog:training-logs";

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_document(&self, doc: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Current document, or an empty one when the file is unreadable.
    fn document_or_empty(&self) -> Map<String, Value> {
        self.read_document().unwrap_or_default()
    }

    fn write_logs(&self, logs: &[TrainingLog]) -> AppResult<()> {
        let mut doc = self.document_or_empty();
        doc.insert(STORAGE_KEY.to_string(), serde_json::to_value(logs)?);
        self.write_document(&doc)
    }
}

impl LogStore for SnapshotStore {
    fn save(&mut self, entry: &TrainingEntry) -> AppResult<TrainingLog> {
        entry.validate()?;

        let log = TrainingLog::from_entry(
            LogId::new(Uuid::new_v4().to_string()),
            time::now(),
            entry,
        );

        let mut logs = self.list();
        logs.insert(0, log.clone());
        self.write_logs(&logs)?;

        Ok(log)
    }

    fn list(&self) -> Vec<TrainingLog> {
        let mut doc = match self.read_document() {
            Ok(doc) => doc,
            Err(e) => {
                warning(format!("Ignoring unreadable snapshot {}: {}", self.path.display(), e));
                return Vec::new();
            }
        };

        let Some(value) = doc.remove(STORAGE_KEY) else {
            return Vec::new();
        };

        match serde_json::from_value(value) {
            Ok(logs) => logs,
            Err(e) => {
                warning(format!("Ignoring corrupt training logs: {}", e));
                Vec::new()
            }
        }
    }

    fn delete(&mut self, id: &LogId) -> bool {
        let before = self.list();
        let kept: Vec<TrainingLog> = before.iter().filter(|l| &l.id != id).cloned().collect();

        if kept.len() == before.len() {
            return false;
        }
        match self.write_logs(&kept) {
            Ok(()) => true,
            Err(e) => {
                warning(format!("Failed to delete training log {}: {}", id, e));
                false
            }
        }
    }

    fn clear_all(&mut self) -> AppResult<()> {
        let mut doc = self.document_or_empty();
        if doc.remove(STORAGE_KEY).is_none() {
            return Ok(());
        }
        self.write_document(&doc)
    }

    fn backend_name(&self) -> &'static str {
        "snapshot"
    }
}
