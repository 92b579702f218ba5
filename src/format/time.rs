use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::clock::{Clock, FixedClock, SystemClock};
use super::input::TimeInput;

/// A step of the cascade: the divisor that promotes a count to the next unit,
/// and the singular name of the unit the count is currently in.
pub type UnitBucket = (f64, &'static str);

/// Cascade from seconds up to years.
///
/// The week divisor is the average number of weeks per month, so a month is
/// never rounded to exactly four weeks.
pub const UNIT_BUCKETS: [UnitBucket; 7] = [
    (60.0, "second"),
    (60.0, "minute"),
    (24.0, "hour"),
    (7.0, "day"),
    (4.34524, "week"),
    (12.0, "month"),
    (f64::INFINITY, "year"),
];

const JUST_NOW: &str = "just now";
const A_LONG_TIME_AGO: &str = "a long time ago";

/// Formats an elapsed duration in whole seconds as a relative time string.
///
/// Returns strings like "just now", "1 second ago", "5 minutes ago",
/// "3 hours ago", "1 week ago", "11 months ago", "2 years ago".
///
/// The count is divided through [`UNIT_BUCKETS`] until it is smaller than the
/// next divisor, then floored. Negative counts never leave the first bucket and
/// read as "just now". NaN fails every comparison, so it falls through every
/// bucket and reads as "a long time ago".
pub fn format_elapsed_seconds(seconds: f64) -> String {
    let mut counter = seconds;

    for (index, (divisor, unit)) in UNIT_BUCKETS.iter().enumerate() {
        if counter < *divisor {
            let rounded = counter.floor();
            debug!(seconds, unit, rounded, "relative time bucket selected");

            if index == 0 && rounded <= 0.0 {
                return JUST_NOW.to_string();
            }

            let plural = if rounded == 1.0 { "" } else { "s" };
            return format!("{rounded} {unit}{plural} ago");
        }

        counter /= divisor;
        trace!(unit, counter, "cascaded to next unit");
    }

    A_LONG_TIME_AGO.to_string()
}

/// Whole seconds elapsed from `date` to `now`, floored.
///
/// Both instants are truncated to milliseconds before subtracting. `None`
/// stands for an instant that could not be resolved and yields NaN.
pub fn elapsed_seconds(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match date {
        Some(date) => {
            let millis = now.timestamp_millis() - date.timestamp_millis();
            (millis as f64 / 1000.0).floor()
        }
        None => f64::NAN,
    }
}

/// Formats timestamps relative to the instant reported by its clock.
#[derive(Debug, Clone, Default)]
pub struct RelativeTimeFormatter<C = SystemClock> {
    clock: C,
}

impl RelativeTimeFormatter<SystemClock> {
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> RelativeTimeFormatter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Formats `input` relative to the clock's current instant.
    ///
    /// An absent input returns an empty string without reading the clock.
    /// Otherwise the clock is read exactly once, after the input is resolved.
    pub fn format<'a, I>(&self, input: Option<I>) -> String
    where
        I: Into<TimeInput<'a>>,
    {
        let Some(input) = input else {
            return String::new();
        };

        let date = input.into().resolve();
        let now = self.clock.now();
        format_elapsed_seconds(elapsed_seconds(date, now))
    }
}

/// Formats a timestamp as a human-readable relative time string against the
/// system clock.
///
/// # Arguments
/// * `input` - A textual timestamp (e.g., "2024-01-15T10:30:00Z") or a
///   structured date/time value; `None` returns an empty string
pub fn format_relative_time<'a, I>(input: Option<I>) -> String
where
    I: Into<TimeInput<'a>>,
{
    RelativeTimeFormatter::system().format(input)
}

/// Same as [`format_relative_time`], with an explicit current instant.
pub fn format_relative_time_at<'a, I>(input: Option<I>, now: DateTime<Utc>) -> String
where
    I: Into<TimeInput<'a>>,
{
    RelativeTimeFormatter::new(FixedClock(now)).format(input)
}
