//! Calendar date utilities
//!
//! Dates are stored as [`NaiveDate`] and rendered in the short
//! `Www Mmm DD YYYY` form (`Sun Jan 01 2023`).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::Serializer;

/// Display format for stored dates
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Date-only inputs accepted by [`parse_date`], tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    DISPLAY_FORMAT,
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%m/%d/%Y",
];

/// Date-time inputs without an offset; the time of day is dropped
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Current calendar date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-supplied date, discarding any time-of-day component.
///
/// Returns `None` for empty or unrecognized input.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(input, format)
                    .ok()
                    .map(|datetime| datetime.date())
            })
        })
}

/// Resolve an optional date input, falling back to today
pub fn resolve_date(input: Option<&str>) -> NaiveDate {
    input.and_then(parse_date).unwrap_or_else(today)
}

/// Render a date in [`DISPLAY_FORMAT`]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Serialize a date in [`DISPLAY_FORMAT`]
pub fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}
