//! Lenient timestamp parsing
//!
//! Strings carrying an offset become zoned instants. Strings without one are
//! wall-clock times, except a bare date which is read as UTC midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

use crate::error::{Result, TimestampError};

const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Minute precision with a `Z` designator, which `%:z` does not accept
const UTC_DESIGNATOR_FORMATS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%d %H:%MZ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    /// A definite instant
    Zoned(DateTime<FixedOffset>),
    /// A local wall-clock reading with no zone attached
    WallClock(NaiveDateTime),
}

pub fn parse_timestamp(text: &str) -> Result<ParsedTimestamp> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(ParsedTimestamp::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(ParsedTimestamp::Zoned(dt));
    }
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(ParsedTimestamp::Zoned(dt));
        }
    }
    for format in UTC_DESIGNATOR_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(ParsedTimestamp::Zoned(naive.and_utc().fixed_offset()));
        }
    }
    for format in WALL_CLOCK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(ParsedTimestamp::WallClock(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
        return Ok(ParsedTimestamp::Zoned(midnight.fixed_offset()));
    }

    trace!(input = %text, "No timestamp format matched");
    Err(TimestampError::Unparseable(text.to_string()))
}

/// Shorthand for callers that always want an instant in UTC
pub fn parse_utc(text: &str) -> Result<DateTime<Utc>> {
    match parse_timestamp(text)? {
        ParsedTimestamp::Zoned(dt) => Ok(dt.with_timezone(&Utc)),
        ParsedTimestamp::WallClock(naive) => Ok(naive.and_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Timelike};

    fn wall(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_rfc3339_with_zulu() {
        let parsed = parse_timestamp("2024-03-05T14:30:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(parsed, ParsedTimestamp::Zoned(expected.fixed_offset()));
    }

    #[test]
    fn test_minute_precision_zulu() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(
            parse_timestamp("2024-03-05T14:30Z").unwrap(),
            ParsedTimestamp::Zoned(expected.fixed_offset())
        );
        assert_eq!(parse_utc("2024-03-05 14:30Z").unwrap(), expected);
        assert_eq!(
            parse_utc("2024-03-05T14:30Z").unwrap(),
            parse_utc("2024-03-05T14:30+00:00").unwrap()
        );
    }

    #[test]
    fn test_rfc3339_with_offset_and_fraction() {
        let parsed = parse_utc("2024-03-05T14:30:00.123456-07:00").unwrap();
        assert_eq!(parsed.hour(), 21);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_rfc2822() {
        let parsed = parse_utc("Tue, 5 Mar 2024 14:30:00 +0000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_wall_clock_forms() {
        let expected = ParsedTimestamp::WallClock(wall(2024, 3, 5, 14, 30, 0));
        assert_eq!(parse_timestamp("2024-03-05T14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-05 14:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-05T14:30").unwrap(), expected);
        assert_eq!(parse_timestamp("  2024-03-05 14:30  ").unwrap(), expected);
    }

    #[test]
    fn test_wall_clock_with_fraction() {
        let parsed = parse_timestamp("2024-03-05T14:30:00.250").unwrap();
        match parsed {
            ParsedTimestamp::WallClock(naive) => {
                assert_eq!(naive.nanosecond(), 250_000_000);
            }
            other => panic!("expected wall clock, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        let parsed = parse_utc("2024-03-05").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_is_rejected() {
        for input in ["", "not a date", "2024-13-45", "14:30"] {
            assert!(
                matches!(parse_timestamp(input), Err(TimestampError::Unparseable(_))),
                "input {:?} should not parse",
                input
            );
        }
    }
}
