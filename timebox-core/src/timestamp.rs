//! ISO-8601 local timestamp parsing.
//!
//! Events carry their start and end as the strings they were created with.
//! Everything that reasons about time goes through [`parse_timestamp`], which
//! reads them as wall-clock local date-times.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{TimeboxError, TimeboxResult};

/// Accepted date-time layouts, tried in order. `%.f` also matches an absent
/// fractional part.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layout used when TimeBox itself renders a timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse an ISO-8601 local timestamp.
///
/// - `2025-10-29T08:00:00`, `2025-10-29T08:00`, fractional seconds, or a space
///   instead of `T`
/// - `2025-10-29` (midnight)
/// - `2025-10-29T08:00:00+02:00` / `...Z`: the offset is dropped and the
///   wall-clock part is kept
pub fn parse_timestamp(value: &str) -> TimeboxResult<NaiveDateTime> {
    let trimmed = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(TimeboxError::MalformedTimestamp {
        value: value.to_string(),
    })
}

/// Render a timestamp the way TimeBox stores them (`YYYY-MM-DDTHH:MM:SS`).
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_full_datetime() {
        assert_eq!(
            parse_timestamp("2025-10-29T08:00:00").unwrap(),
            at(2025, 10, 29, 8, 0, 0)
        );
    }

    #[test]
    fn test_parse_without_seconds() {
        assert_eq!(
            parse_timestamp("2025-10-29T08:15").unwrap(),
            at(2025, 10, 29, 8, 15, 0)
        );
    }

    #[test]
    fn test_parse_space_separator_and_fraction() {
        let dt = parse_timestamp("2025-10-29 08:15:30.250").unwrap();
        assert_eq!(dt.format("%H:%M:%S%.3f").to_string(), "08:15:30.250");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(
            parse_timestamp("2025-10-29").unwrap(),
            at(2025, 10, 29, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_offset_keeps_wall_clock() {
        assert_eq!(
            parse_timestamp("2025-10-29T08:00:00+02:00").unwrap(),
            at(2025, 10, 29, 8, 0, 0)
        );
        assert_eq!(
            parse_timestamp("2025-10-29T08:00:00Z").unwrap(),
            at(2025, 10, 29, 8, 0, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "tomorrow at 9", "2025-13-01T08:00:00", "29/10/2025 08:00"] {
            match parse_timestamp(bad) {
                Err(TimeboxError::MalformedTimestamp { value }) => assert_eq!(value, bad),
                other => panic!("expected MalformedTimestamp for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(&at(2025, 3, 20, 15, 0, 0)),
            "2025-03-20T15:00:00"
        );
    }
}
