use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::types::errors::TimestampError;

const DATE_FORMAT: &str = "%Y-%m-%d";

//NOTE: Naive timestamps carry no offset, every one of them is read as UTC so that hour buckets line up
//      with the instants they were parsed from.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M"
];

/// Parses a timestamp cell into a UTC instant.
///
/// Accepts RFC 3339 values with an offset, naive date-times (`T` or space separated,
/// seconds and fractions optional) and bare calendar dates, which resolve to midnight.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok()) {
        return Ok(naive.and_utc());
    }

    parse_date(value).ok_or_else(|| TimestampError::InvalidFormat(value.to_string()))
}

/// Parses a strict `YYYY-MM-DD` value into midnight UTC of that day.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Drops minutes, seconds and sub-second precision.
pub fn truncate_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.with_minute(0)
        .and_then(|value| value.with_second(0))
        .and_then(|value| value.with_nanosecond(0))
        .unwrap_or(instant)
}
