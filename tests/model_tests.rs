use trelog::config::Config;
use trelog::core::add::AddLogic;
use trelog::errors::AppError;
use trelog::models::templates::Template;
use trelog::models::{LogId, TrainingEntry, TrainingLog, TrainingSet};
use trelog::session::Session;
use trelog::store::Backend;
use trelog::utils::formatting::{fmt_interval, fmt_weight};
use trelog::utils::sets::parse_set;
use trelog::utils::time::{now, parse_stamp, stamp};

#[test]
fn set_notation_accepts_common_spellings() {
    assert_eq!(parse_set("60x8").unwrap(), TrainingSet::new(60.0, 8));
    assert_eq!(parse_set("52.5X10").unwrap(), TrainingSet::new(52.5, 10));
    assert_eq!(parse_set("52,5 x 10").unwrap(), TrainingSet::new(52.5, 10));
    assert_eq!(parse_set("40kg×12").unwrap(), TrainingSet::new(40.0, 12));
    assert_eq!(parse_set("0x15").unwrap(), TrainingSet::new(0.0, 15));
}

#[test]
fn set_notation_rejects_garbage() {
    for bad in ["", "60", "x8", "60x", "-5x3", "60x8x2", "abc"] {
        assert!(
            matches!(parse_set(bad), Err(AppError::InvalidSet(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn entry_validation() {
    let ok = TrainingEntry::new("Squat", vec![TrainingSet::new(60.0, 5)]).with_interval(120);
    assert!(ok.validate().is_ok());

    let zero_interval = TrainingEntry::new("Squat", vec![TrainingSet::new(60.0, 5)]).with_interval(0);
    assert!(zero_interval.validate().is_err());

    let nan = TrainingEntry::new("Squat", vec![TrainingSet::new(f64::NAN, 5)]);
    assert!(nan.validate().is_err());
}

#[test]
fn entry_json_uses_camel_case_and_omits_absent_fields() {
    let entry = TrainingEntry::new("Squat", vec![TrainingSet::new(60.0, 5)]).with_interval(90);
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["intervalSeconds"], 90);
    assert!(json.get("memo").is_none());
}

#[test]
fn log_statistics() {
    let log = TrainingLog {
        id: LogId::from("x"),
        date: now(),
        exercise: "Bench Press".into(),
        sets: vec![TrainingSet::new(50.0, 10), TrainingSet::new(60.0, 5)],
        interval_seconds: Some(90),
        memo: None,
    };

    assert_eq!(log.max_weight(), 60.0);
    assert_eq!(log.total_reps(), 15);
    assert_eq!(log.total_volume(), 800.0);
}

#[test]
fn stamps_are_fixed_width_and_round_trip() {
    let t = now();
    let s = stamp(&t);

    assert!(s.ends_with('Z'));
    assert_eq!(s.len(), "2025-09-01T10:00:00.000000Z".len());
    assert_eq!(parse_stamp(&s), Some(t));
}

#[test]
fn build_entry_from_template_and_overrides() {
    let from_template = AddLogic::build_entry(None, &[], None, None, Some("bench")).unwrap();
    assert_eq!(from_template, Template::BenchPress.entry());

    let overridden = AddLogic::build_entry(
        Some("  Paused Bench  "),
        &["70x3".to_string()],
        Some(180),
        Some("  "),
        Some("BENCH"),
    )
    .unwrap();
    assert_eq!(overridden.exercise, "Paused Bench");
    assert_eq!(overridden.sets, vec![TrainingSet::new(70.0, 3)]);
    assert_eq!(overridden.interval_seconds, Some(180));
    assert_eq!(overridden.memo, None);
}

#[test]
fn build_entry_errors() {
    assert!(matches!(
        AddLogic::build_entry(None, &["60x5".into()], None, None, None),
        Err(AppError::InvalidEntry(_))
    ));
    assert!(matches!(
        AddLogic::build_entry(Some("Squat"), &[], None, None, None),
        Err(AppError::InvalidEntry(_))
    ));
    assert!(matches!(
        AddLogic::build_entry(None, &[], None, None, Some("curl")),
        Err(AppError::UnknownTemplate(_))
    ));
}

#[test]
fn session_treats_blank_ids_as_signed_out() {
    assert_eq!(Session::new(Some("  ".into())).user_id(), None);
    assert_eq!(Session::new(None).user_id(), None);
    assert_eq!(Session::new(Some(" alice ".into())).user_id(), Some("alice"));
    assert!(matches!(
        Session::anonymous().require_user(),
        Err(AppError::Unauthenticated)
    ));
}

#[test]
fn backend_follows_database_setting() {
    let mut cfg = Config {
        snapshot_file: "/tmp/snap.json".into(),
        ..Config::default()
    };
    assert_eq!(
        cfg.backend(),
        Backend::Snapshot {
            file: "/tmp/snap.json".into()
        }
    );

    cfg.database = Some("/tmp/t.sqlite".into());
    assert_eq!(
        cfg.backend(),
        Backend::Normalized {
            database: "/tmp/t.sqlite".into()
        }
    );
}

#[test]
fn formatting_helpers() {
    assert_eq!(fmt_weight(60.0), "60");
    assert_eq!(fmt_weight(52.5), "52.5");
    assert_eq!(fmt_weight(1.25), "1.25");
    assert_eq!(fmt_interval(45), "45s");
    assert_eq!(fmt_interval(120), "2m");
    assert_eq!(fmt_interval(90), "1m30s");
}
