use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{setup_snapshot, setup_test_db, temp_out, trl};

fn list_json(args: &[&str]) -> Vec<Value> {
    let output = trl()
        .args(args)
        .args(["list", "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(output.status.success());
    serde_json::from_slice::<Value>(&output.stdout)
        .expect("valid JSON")
        .as_array()
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    trl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    for table in ["exercises", "training_history", "log"] {
        assert!(
            trelog::db::schema::table_exists(&conn, table).unwrap(),
            "missing table {table}"
        );
    }
}

#[test]
fn test_add_and_list_bench_press() {
    let db_path = setup_test_db("cli_add_list");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "Bench Press", "--set", "50x10", "--set", "60x5", "--interval", "90"])
        .assert()
        .success()
        .stdout(contains("Saved Bench Press: 2 set(s), max 60kg"));

    trl()
        .args(base)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Bench Press"))
        .stdout(contains("50kg × 10, 60kg × 5"));

    let logs = list_json(&base);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["exercise"], "Bench Press");
    assert_eq!(logs[0]["sets"].as_array().unwrap().len(), 2);
}

#[test]
fn test_add_requires_a_user_on_sqlite() {
    let db_path = setup_test_db("cli_add_unauthenticated");

    trl()
        .args(["--db", &db_path, "--test", "add", "Squat", "--set", "80x5"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));

    // reading without a user is not an error
    trl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No training sessions yet."));
}

#[test]
fn test_add_rejects_bad_set_notation() {
    let db_path = setup_test_db("cli_bad_set");

    trl()
        .args(["--db", &db_path, "--user", "alice", "--test"])
        .args(["add", "Squat", "--set", "eighty"])
        .assert()
        .failure()
        .stderr(contains("Invalid set 'eighty'"));
}

#[test]
fn test_add_from_template() {
    let db_path = setup_test_db("cli_template");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "--template", "squat"])
        .assert()
        .success()
        .stdout(contains("Saved Squat: 3 set(s), max 80kg"));

    // the per-set table has no interval column
    let logs = list_json(&base);
    assert_eq!(logs[0]["exercise"], "Squat");
    assert!(logs[0]["intervalSeconds"].is_null());
}

#[test]
fn test_snapshot_keeps_template_interval() {
    let snap = setup_snapshot("cli_template_snapshot");
    let snap = snap.to_string_lossy().to_string();
    let base = ["--snapshot", snap.as_str(), "--test"];

    trl()
        .args(base)
        .args(["add", "--template", "bench"])
        .assert()
        .success()
        .stdout(contains("Rest interval: 1m30s"));

    let logs = list_json(&base);
    assert_eq!(logs[0]["exercise"], "Bench Press");
    assert_eq!(logs[0]["intervalSeconds"], 90);

    trl()
        .args(base)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1m30s"));
}

#[test]
fn test_delete_by_listed_id() {
    let db_path = setup_test_db("cli_delete");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();
    trl()
        .args(base)
        .args(["add", "Deadlift", "--set", "120x3"])
        .assert()
        .success();

    let logs = list_json(&base);
    let squat_id = logs
        .iter()
        .find(|l| l["exercise"] == "Squat")
        .and_then(|l| l["id"].as_str())
        .unwrap()
        .to_string();

    trl()
        .args(base)
        .args(["del", &squat_id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let logs = list_json(&base);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["exercise"], "Deadlift");
}

#[test]
fn test_delete_garbage_id_is_harmless() {
    let db_path = setup_test_db("cli_delete_garbage");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();

    trl()
        .args(base)
        .args(["del", "garbage-no-separator", "--yes"])
        .assert()
        .success()
        .stdout(contains("No training session with id"));

    assert_eq!(list_json(&base).len(), 1);
}

#[test]
fn test_delete_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("cli_delete_cancel");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();
    let id = list_json(&base)[0]["id"].as_str().unwrap().to_string();

    trl()
        .args(base)
        .args(["del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(list_json(&base).len(), 1);
}

#[test]
fn test_clear_and_exercises() {
    let db_path = setup_test_db("cli_clear");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();

    trl()
        .args(base)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 1 training session(s)."));

    assert!(list_json(&base).is_empty());

    trl()
        .args(base)
        .arg("exercises")
        .assert()
        .success()
        .stdout(contains("Squat"));
}

#[test]
fn test_calendar_and_day_filter() {
    let db_path = setup_test_db("cli_calendar");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();
    trl()
        .args(base)
        .args(["add", "Bench Press", "--set", "60x5"])
        .assert()
        .success();

    trl()
        .args(base)
        .args(["list", "--calendar"])
        .assert()
        .success()
        .stdout(contains(today.as_str()))
        .stdout(contains("Bench Press, Squat"))
        .stdout(contains("(2 session(s))"));

    trl()
        .args(base)
        .args(["list", "--day", &today])
        .assert()
        .success()
        .stdout(contains("Squat").and(contains("Bench Press")));

    trl()
        .args(base)
        .args(["list", "--day", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No training sessions yet."));

    trl()
        .args(base)
        .args(["list", "--day", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_snapshot_backend_needs_no_user() {
    let snap = setup_snapshot("cli_snapshot");
    let snap = snap.to_string_lossy().to_string();
    let base = ["--snapshot", snap.as_str(), "--test"];

    trl()
        .args(base)
        .args(["add", "Row", "--set", "40x12", "--memo", "slow eccentric"])
        .assert()
        .success();

    let logs = list_json(&base);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["memo"], "slow eccentric");

    let id = logs[0]["id"].as_str().unwrap().to_string();
    trl()
        .args(base)
        .args(["del", &id, "--yes"])
        .assert()
        .success();
    assert!(list_json(&base).is_empty());

    trl()
        .args(base)
        .arg("exercises")
        .assert()
        .success()
        .stderr(contains("no exercise registry"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];
    let csv_out = temp_out("cli_export", "csv");
    let json_out = temp_out("cli_export", "json");

    trl()
        .args(base)
        .args(["add", "Bench Press", "--set", "50x10", "--set", "60x5"])
        .assert()
        .success();

    trl()
        .args(base)
        .args(["export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = std::fs::read_to_string(&csv_out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3, "header + one row per set");
    assert!(lines[0].starts_with("log_id,date,exercise,set,weight,reps"));
    assert!(lines[2].contains("Bench Press,2,60"));

    trl()
        .args(base)
        .args(["export", "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json[0]["exercise"], "Bench Press");

    // refuses to overwrite without --force when the answer is no
    trl()
        .args(base)
        .args(["export", "--format", "json", "--file", &json_out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("use --force"));
}

#[test]
fn test_log_print_shows_audit_trail() {
    let db_path = setup_test_db("cli_log_print");
    let base = ["--db", db_path.as_str(), "--user", "alice", "--test"];

    trl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    trl()
        .args(base)
        .args(["add", "Squat", "--set", "80x5"])
        .assert()
        .success();

    trl()
        .args(base)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Squat"))
        .stdout(contains("1 set(s) saved"));
}
