use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn local_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M").to_string()
}

/// `2025-09-01 (Mon)`
pub fn day_label(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d (%a)").to_string()
}
