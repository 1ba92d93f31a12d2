mod common;
use common::temp_out;

use std::fs;
use std::io::Cursor;
use std::path::Path;
use trelog::errors::AppError;
use trelog::export::fs_utils::{Overwrite, check_target};

#[test]
fn missing_file_needs_no_answer() {
    let out = temp_out("target_missing", "csv");
    let mut answers = Cursor::new("");

    let decision = check_target(Path::new(&out), false, &mut answers).unwrap();
    assert_eq!(decision, Overwrite::NewFile);
}

#[test]
fn force_skips_the_question() {
    let out = temp_out("target_force", "csv");
    fs::write(&out, "old").unwrap();
    let mut answers = Cursor::new("n\n");

    let decision = check_target(Path::new(&out), true, &mut answers).unwrap();
    assert_eq!(decision, Overwrite::Forced);
}

#[test]
fn existing_file_follows_the_answer() {
    let out = temp_out("target_answer", "json");
    fs::write(&out, "old").unwrap();

    let decision = check_target(Path::new(&out), false, &mut Cursor::new(" Yes \n")).unwrap();
    assert_eq!(decision, Overwrite::Confirmed);

    for answer in ["n\n", "\n", ""] {
        let err = check_target(Path::new(&out), false, &mut Cursor::new(answer)).unwrap_err();
        assert!(matches!(err, AppError::Export(ref msg) if msg.contains("use --force")));
    }

    // a refusal never touches the file
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}
