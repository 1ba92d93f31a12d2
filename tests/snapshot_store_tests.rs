mod common;
use common::setup_snapshot;

use std::fs;
use trelog::errors::AppError;
use trelog::models::{LogId, TrainingEntry, TrainingSet};
use trelog::store::snapshot::STORAGE_KEY;
use trelog::store::{LogStore, SnapshotStore};

fn entry(name: &str, weight: f64) -> TrainingEntry {
    TrainingEntry::new(name, vec![TrainingSet::new(weight, 10)])
}

#[test]
fn missing_file_lists_nothing() {
    let path = setup_snapshot("snapshot_missing");
    let store = SnapshotStore::new(&path);

    assert!(store.list().is_empty());
    assert!(!path.exists());
}

#[test]
fn save_prepends_and_issues_unique_ids() {
    let path = setup_snapshot("snapshot_prepend");
    let mut store = SnapshotStore::new(&path);

    let first = store.save(&entry("Squat", 60.0)).unwrap();
    let second = store.save(&entry("Bench Press", 40.0).with_interval(90)).unwrap();

    assert_ne!(first.id, second.id);

    let logs = store.list();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0], second);
    assert_eq!(logs[1], first);
}

#[test]
fn persisted_layout_is_one_array_under_the_namespaced_key() {
    let path = setup_snapshot("snapshot_layout");
    let mut store = SnapshotStore::new(&path);
    store
        .save(&entry("Bench Press", 50.0).with_interval(90).with_memo("easy"))
        .unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let logs = doc[STORAGE_KEY].as_array().expect("array under key");
    assert_eq!(logs.len(), 1);

    let log = &logs[0];
    for field in ["id", "date", "exercise", "sets", "intervalSeconds", "memo"] {
        assert!(log.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(log["sets"][0]["weight"], 50.0);
    assert_eq!(log["sets"][0]["reps"], 10);
}

#[test]
fn delete_filters_by_exact_id() {
    let path = setup_snapshot("snapshot_delete");
    let mut store = SnapshotStore::new(&path);
    let keep = store.save(&entry("Squat", 60.0)).unwrap();
    let gone = store.save(&entry("Row", 40.0)).unwrap();

    assert!(store.delete(&gone.id));
    assert!(!store.delete(&LogId::from("garbage-no-separator")));

    assert_eq!(store.list(), vec![keep]);
}

#[test]
fn corrupt_data_is_treated_as_empty() {
    let path = setup_snapshot("snapshot_corrupt");
    fs::write(&path, "{ this is not json").unwrap();
    let store = SnapshotStore::new(&path);
    assert!(store.list().is_empty());

    fs::write(&path, format!(r#"{{"{STORAGE_KEY}": "not an array"}}"#)).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn save_after_corruption_starts_a_fresh_collection() {
    let path = setup_snapshot("snapshot_corrupt_then_save");
    fs::write(&path, "garbage").unwrap();
    let mut store = SnapshotStore::new(&path);

    store.save(&entry("Squat", 60.0)).unwrap();

    assert_eq!(store.list().len(), 1);
}

#[test]
fn other_keys_in_the_document_are_preserved() {
    let path = setup_snapshot("snapshot_other_keys");
    fs::write(&path, r#"{"trelog:theme": "dark"}"#).unwrap();
    let mut store = SnapshotStore::new(&path);

    store.save(&entry("Squat", 60.0)).unwrap();
    store.clear_all().unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["trelog:theme"], "dark");
    assert!(doc.get(STORAGE_KEY).is_none());
    assert!(store.list().is_empty());
}

#[test]
fn invalid_entry_is_rejected() {
    let path = setup_snapshot("snapshot_invalid");
    let mut store = SnapshotStore::new(&path);

    let err = store
        .save(&TrainingEntry::new("", vec![TrainingSet::new(1.0, 1)]))
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidEntry(_)));
    assert!(!path.exists());
}
