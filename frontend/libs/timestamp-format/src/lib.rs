//! Human-readable timestamps for the grading UI
//!
//! ```rust
//! use chrono::FixedOffset;
//! use timestamp_format::readable_timestamp_in;
//!
//! let mountain = FixedOffset::west_opt(7 * 3600).unwrap();
//! let shown = readable_timestamp_in("2024-03-05T21:30:00Z", &mountain).unwrap();
//! assert_eq!(shown, "3/5/2024 2:30 PM");
//! ```

pub mod error;
pub mod format;
pub mod parse;

pub use error::{Result, TimestampError};
pub use format::{format_wall_clock, readable_timestamp, readable_timestamp_in, TimestampInput};
pub use parse::{parse_timestamp, parse_utc, ParsedTimestamp};
