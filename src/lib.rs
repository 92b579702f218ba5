//! Human-readable relative time ("5 minutes ago", "just now") for timestamps.

pub mod format;
pub mod shared;

pub use format::{
    Clock, FixedClock, RelativeTimeFormatter, SystemClock, TimeInput, TimestampError,
    format_relative_time, format_relative_time_at, parse_timestamp,
};
