use chrono::{Local, NaiveDate, SecondsFormat, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Current instant in UTC, millisecond precision, `Z` suffix.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// True for a well-formed calendar date in `YYYY-MM-DD` form.
/// `2024-2-1` parses with chrono but would not sort correctly as text.
pub fn is_iso_date(s: &str) -> bool {
    s.len() == 10 && parse_date(s).is_some()
}

/// Renders an ISO instant in local time for list output; unparsable
/// stamps are shown as stored.
pub fn display_instant(ts: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}
