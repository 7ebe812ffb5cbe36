//! Timestamp parsing and minute arithmetic.
//!
//! Arrival times come in over the wire as ISO-8601 strings, sometimes
//! with a trailing `Z` or a numeric UTC offset and sometimes without.
//! The engine works in naive local time throughout: an offset is dropped
//! without shifting the clock reading, so `08:30Z` and `08:30+02:00`
//! both normalize to `08:30`.

use chrono::format::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses an arrival timestamp into a naive local datetime.
///
/// Accepted forms, in order of preference:
/// 1. RFC 3339 with `Z` or a numeric offset (offset dropped, not applied)
/// 2. `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds
/// 3. `YYYY-MM-DD` (interpreted as midnight)
pub fn parse_arrival(s: &str) -> Result<NaiveDateTime, ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    s.parse::<NaiveDate>().map(|d| d.and_time(NaiveTime::MIN))
}

/// Whole minutes from `earlier` to `later`, truncated toward zero.
#[inline]
pub fn minutes_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    (later - earlier).num_minutes()
}

/// Milliseconds since the Unix epoch, reading the naive value as UTC.
///
/// Only used for ordering and arithmetic; the engine never converts
/// back, so the UTC reading is an arbitrary but consistent anchor.
#[inline]
pub fn timestamp_ms(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}
