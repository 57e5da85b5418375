//! `M/D/YYYY h:mm AM|PM` display strings
//!
//! The hour rule is the one the grading UI has always shown: hours above 12
//! roll over and get PM, everything else is printed as-is with AM. Noon
//! therefore renders as `12:xx AM` and midnight as `0:xx AM`.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::Result;
use crate::parse::{parse_timestamp, ParsedTimestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampInput {
    Local(DateTime<Local>),
    Utc(DateTime<Utc>),
    Fixed(DateTime<FixedOffset>),
    /// Wall-clock time, displayed without zone conversion
    Naive(NaiveDateTime),
    Text(String),
}

impl From<DateTime<Local>> for TimestampInput {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Local(dt)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Fixed(dt)
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Format in the process's local time zone
pub fn readable_timestamp(input: impl Into<TimestampInput>) -> Result<String> {
    readable_timestamp_in(input, &Local)
}

/// Format in an explicit time zone
pub fn readable_timestamp_in<Tz>(input: impl Into<TimestampInput>, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
{
    let formatted = match input.into() {
        TimestampInput::Local(dt) => format_wall_clock(&dt.with_timezone(tz)),
        TimestampInput::Utc(dt) => format_wall_clock(&dt.with_timezone(tz)),
        TimestampInput::Fixed(dt) => format_wall_clock(&dt.with_timezone(tz)),
        TimestampInput::Naive(naive) => format_wall_clock(&naive),
        TimestampInput::Text(text) => match parse_timestamp(&text)? {
            ParsedTimestamp::Zoned(dt) => format_wall_clock(&dt.with_timezone(tz)),
            ParsedTimestamp::WallClock(naive) => format_wall_clock(&naive),
        },
    };

    Ok(formatted)
}

pub fn format_wall_clock<T>(t: &T) -> String
where
    T: Datelike + Timelike,
{
    let hour = t.hour();
    let (display_hour, meridiem) = if hour > 12 {
        (hour - 12, "PM")
    } else {
        (hour, "AM")
    };

    format!(
        "{}/{}/{} {}:{:02} {}",
        t.month(),
        t.day(),
        t.year(),
        display_hour,
        t.minute(),
        meridiem
    )
}
