//! Feed timestamp normalization.
//!
//! News feeds mix timestamp formats: offset-bearing timestamps, naive
//! datetimes, and plain calendar dates. Each format is a parser strategy;
//! strategies are tried in priority order and the first success wins.
//! Every success is normalized to a timezone-agnostic calendar date (UTC
//! first, then the time-of-day is stripped) before it can serve as a join
//! key. Naive timestamps are treated as already-UTC, never as local time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

type DateStrategy = fn(&str) -> Option<NaiveDate>;

/// Most specific format first: an offset-bearing string would also survive a
/// prefix match against the naive formats with the offset silently ignored.
const STRATEGIES: &[DateStrategy] = &[
    parse_offset_timestamp,
    parse_naive_timestamp,
    parse_plain_date,
];

/// Parse a raw feed date into a normalized calendar date.
///
/// Returns `None` for anything no strategy accepts; the caller counts and
/// excludes such rows (row-level recovery, not an error).
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    STRATEGIES.iter().find_map(|strategy| strategy(raw))
}

/// RFC 3339 or `%Y-%m-%d %H:%M:%S%:z`: convert to UTC, then strip to a date.
fn parse_offset_timestamp(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// `%Y-%m-%d %H:%M:%S` with no offset — treated as already-UTC.
fn parse_naive_timestamp(raw: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Bare `%Y-%m-%d`.
fn parse_plain_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
