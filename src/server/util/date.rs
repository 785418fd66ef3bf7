//! German display-date formatting and parsing.
//!
//! Training sessions are identified by their display date
//! (`"<Weekday>, DD.MM.YYYY"`, e.g. `"Mo, 02.06.2025"`) and edit-audit
//! stamps use `"DD.MM.YYYY HH:MM"`. Formatting always zero-pads, and stored
//! dates are normalized through parse-then-reformat on save, so string
//! comparison of two formatted dates agrees with comparison of the
//! underlying days.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A date or timestamp string that does not conform to the display format.
#[derive(Error, Debug)]
#[error("'{value}' is not a valid date: {source}")]
pub struct DateParseError {
    /// The input that failed to parse
    pub value: String,
    /// The underlying parse error
    #[source]
    pub source: chrono::ParseError,
}

/// German two-letter weekday abbreviation, Mon through Sun.
pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

/// Formats the display identifier of a training, `"<Weekday>, DD.MM.YYYY"`.
pub fn format_display(date: NaiveDate) -> String {
    format!("{}, {}", weekday_abbrev(date), date.format(DATE_FORMAT))
}

/// Formats an edit-audit stamp, `"DD.MM.YYYY HH:MM"`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a display date back into a calendar date.
///
/// Accepts both the full form with weekday prefix (`"Mo, 02.06.2025"`) and a
/// bare `"02.06.2025"`: the weekday part before `", "` is dropped when
/// present. Day and month need not be zero-padded on input.
///
/// # Arguments
/// - `value` - Display date, with or without weekday prefix
///
/// # Returns
/// - `Ok(NaiveDate)` - The parsed calendar date
/// - `Err(DateParseError)` - The remainder is not a valid `DD.MM.YYYY` date
pub fn parse_display(value: &str) -> Result<NaiveDate, DateParseError> {
    let date_part = value.split_once(", ").map_or(value, |(_, rest)| rest).trim();

    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|source| DateParseError {
        value: value.to_string(),
        source,
    })
}

/// Parses an edit-audit stamp in `"DD.MM.YYYY HH:MM"` format.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, DateParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        DateParseError {
            value: value.to_string(),
            source,
        }
    })
}
