use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current instant, truncated to the precision that is actually stored.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Canonical text form of a timestamp: RFC 3339, UTC, microseconds.
/// Fixed width, so lexicographic order equals chronological order.
pub fn stamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_stamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
