use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, Utc};
use tracing::debug;

use super::parse::parse_timestamp;

/// A timestamp as handed to the formatter: either text still to be parsed,
/// or an instant that is already structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInput<'a> {
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl TimeInput<'_> {
    /// Resolves the input to an instant.
    ///
    /// Returns `None` when the text cannot be parsed. That stands for an
    /// invalid instant rather than an error; the formatter keeps going with it.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(text) => match parse_timestamp(text) {
                Ok(instant) => Some(instant),
                Err(e) => {
                    debug!(input = %text, error = %e, "treating timestamp as invalid instant");
                    None
                }
            },
            Self::Instant(instant) => Some(*instant),
        }
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<DateTime<Utc>> for TimeInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<DateTime<FixedOffset>> for TimeInput<'_> {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::Instant(instant.with_timezone(&Utc))
    }
}

impl From<DateTime<Local>> for TimeInput<'_> {
    fn from(instant: DateTime<Local>) -> Self {
        Self::Instant(instant.with_timezone(&Utc))
    }
}

impl From<SystemTime> for TimeInput<'_> {
    fn from(instant: SystemTime) -> Self {
        Self::Instant(instant.into())
    }
}
