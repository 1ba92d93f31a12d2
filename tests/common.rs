#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use trelog::models::StoredSetRow;

pub fn trl() -> Command {
    let mut cmd = cargo_bin_cmd!("trelog");
    // keep the developer's real ~/.trelog out of the tests
    cmd.env(trelog::config::HOME_ENV, env::temp_dir().join("trelog_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Same for the JSON snapshot backend
pub fn setup_snapshot(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trelog_snapshot.json", name));
    fs::remove_file(&path).ok();
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trelog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_756_720_800 + secs, 0).unwrap()
}

pub fn row(
    row_id: i64,
    date: DateTime<Utc>,
    exercise_id: &str,
    name: Option<&str>,
    weight: f64,
    reps: u32,
) -> StoredSetRow {
    StoredSetRow {
        row_id,
        user_id: "alice".into(),
        exercise_id: exercise_id.into(),
        date,
        weight,
        reps,
        memo: None,
        exercise_name: name.map(String::from),
    }
}
