use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Attempt to convert a string into a chrono::DateTime in UTC. Accepts any of:
///  * RFC3339/ISO8601 timestamp (example: "2016-04-16T17:09:12.759-07:00")
///  * Naive datetime without an offset, taken as UTC (example: "2024-01-01T09:30:00")
///  * Calendar date, taken as midnight UTC (example: "2024-01-01")
/// It will return None if the string matches none of these formats.
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
