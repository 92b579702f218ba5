use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use thiserror::Error;

/// Date-time layouts without an offset. Matched text is read in the host's
/// local time zone. `%.f` also matches when there is no fractional part.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Empty timestamp")]
    Empty,

    #[error("Unrecognized timestamp: {0}")]
    Unrecognized(String),

    #[error("Timestamp does not exist in the local time zone: {0}")]
    NonexistentLocalTime(String),
}

/// Parses a textual timestamp into a UTC instant.
///
/// Accepted forms, tried in order:
/// * RFC 3339 with an offset or `Z` (e.g., "2024-01-15T10:30:00Z")
/// * RFC 2822 (e.g., "Mon, 15 Jan 2024 10:30:00 +0000")
/// * ISO date-time without an offset (e.g., "2024-01-15T10:30:00"), in local time
/// * ISO date (e.g., "2024-01-15"), as UTC midnight
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, TimestampError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return resolve_local(&Local, &naive)
                .ok_or_else(|| TimestampError::NonexistentLocalTime(text.to_string()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(TimestampError::Unrecognized(text.to_string()))
}

/// Reads a wall-clock time in `tz`.
///
/// A time repeated by a backward transition takes the earlier instant. A time
/// skipped by a forward transition is read with the offset in effect before
/// the transition, which moves it forward by the length of the gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }

    let before_gap = tz
        .from_local_datetime(&(*naive - TimeDelta::days(1)))
        .earliest()?;
    let offset = before_gap.offset().fix();
    Some(Utc.from_utc_datetime(&(*naive - offset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TZ: &str = "TZ";
    /// US Eastern rules: clocks jump 02:00 -> 03:00 on the second Sunday of
    /// March and fall back 02:00 -> 01:00 on the first Sunday of November.
    const NEW_YORK_RULES: &str = "EST5EDT,M3.2.0,M11.1.0";

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn local(naive: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S").unwrap();
        Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[rstest]
    #[case::zulu("2024-01-15T10:30:00Z", utc(2024, 1, 15, 10, 30, 0))]
    #[case::positive_offset("2024-01-15T19:30:00+09:00", utc(2024, 1, 15, 10, 30, 0))]
    #[case::negative_offset("2024-01-15T05:30:00-05:00", utc(2024, 1, 15, 10, 30, 0))]
    #[case::rfc2822("Mon, 15 Jan 2024 10:30:00 +0000", utc(2024, 1, 15, 10, 30, 0))]
    #[case::rfc2822_gmt("Mon, 15 Jan 2024 10:30:00 GMT", utc(2024, 1, 15, 10, 30, 0))]
    #[case::date_only("2024-01-15", utc(2024, 1, 15, 0, 0, 0))]
    #[case::surrounding_whitespace("  2024-01-15T10:30:00Z\n", utc(2024, 1, 15, 10, 30, 0))]
    fn parses_absolute_timestamps(#[case] text: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(parse_timestamp(text), Ok(expected));
    }

    #[test]
    fn keeps_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-15T10:30:00.250Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[rstest]
    #[case::t_separator("2024-01-15T10:30:00", "2024-01-15T10:30:00")]
    #[case::space_separator("2024-01-15 10:30:00", "2024-01-15T10:30:00")]
    #[case::no_seconds("2024-01-15T10:30", "2024-01-15T10:30:00")]
    #[case::space_no_seconds("2024-01-15 10:30", "2024-01-15T10:30:00")]
    fn parses_offsetless_timestamps_as_local_time(#[case] text: &str, #[case] naive: &str) {
        temp_env::with_var(TZ, Some(NEW_YORK_RULES), || {
            assert_eq!(parse_timestamp(text), Ok(local(naive)));
        });
    }

    #[rstest]
    #[case::standard_time("2024-01-15T10:30:00", utc(2024, 1, 15, 15, 30, 0))]
    #[case::daylight_time("2024-07-15T10:30:00", utc(2024, 7, 15, 14, 30, 0))]
    #[case::skipped_by_spring_forward("2024-03-10T02:30:00", utc(2024, 3, 10, 7, 30, 0))]
    #[case::repeated_by_fall_back("2024-11-03T01:30:00", utc(2024, 11, 3, 5, 30, 0))]
    fn resolves_local_time_around_transitions(
        #[case] text: &str,
        #[case] expected: DateTime<Utc>,
    ) {
        temp_env::with_var(TZ, Some(NEW_YORK_RULES), || {
            assert_eq!(parse_timestamp(text), Ok(expected));
        });
    }

    #[test]
    fn resolve_local_with_fixed_offset() {
        let offset = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let naive = NaiveDateTime::parse_from_str("2024-01-15T19:30:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        assert_eq!(
            resolve_local(&offset, &naive),
            Some(utc(2024, 1, 15, 10, 30, 0))
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn rejects_empty(#[case] text: &str) {
        assert_eq!(parse_timestamp(text), Err(TimestampError::Empty));
    }

    #[rstest]
    #[case::word("invalid")]
    #[case::dashed_words("not-a-date")]
    #[case::month_out_of_range("2024-13-01")]
    #[case::day_out_of_range("2024-02-30T00:00:00Z")]
    #[case::wrong_weekday("Tue, 15 Jan 2024 10:30:00 +0000")]
    fn rejects_unrecognized(#[case] text: &str) {
        assert_eq!(
            parse_timestamp(text),
            Err(TimestampError::Unrecognized(text.to_string()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(TimestampError::Empty.to_string(), "Empty timestamp");
        assert_eq!(
            TimestampError::Unrecognized("x".to_string()).to_string(),
            "Unrecognized timestamp: x"
        );
    }
}
