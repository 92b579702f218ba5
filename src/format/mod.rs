mod clock;
mod input;
mod parse;
mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use input::TimeInput;
pub use parse::{TimestampError, parse_timestamp};
pub use time::{
    RelativeTimeFormatter, UNIT_BUCKETS, UnitBucket, elapsed_seconds, format_elapsed_seconds,
    format_relative_time, format_relative_time_at,
};
