//! Calendar date input model
//!
//! Every value entering the engine is reduced to a `chrono::NaiveDate`:
//! timestamps are truncated to their calendar day, strings are parsed,
//! and anything unparseable becomes "absent".

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// A timezone-less calendar date with day granularity
pub type CalendarDate = NaiveDate;

/// Canonical date format (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp formats accepted in addition to RFC 3339
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date string into a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM[:SS]`
/// timestamps; any time-of-day component is discarded.
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate, MetricsError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| MetricsError::invalid_date(trimmed))
}

/// Formats a calendar date as `YYYY-MM-DD`
pub fn format_calendar_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Raw date input as received from a form field
///
/// Keeps "not supplied" and "supplied but malformed" apart so the validator
/// can report them differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DateInput {
    /// No value supplied (absent or blank)
    Missing,
    /// A value that does not parse as a calendar date
    Invalid(String),
    /// A parsed calendar date
    Date(CalendarDate),
}

impl DateInput {
    /// Classifies an optional raw string
    pub fn from_optional_str(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => DateInput::Missing,
            Some(raw) => match parse_calendar_date(raw) {
                Ok(date) => DateInput::Date(date),
                Err(_) => DateInput::Invalid(raw.to_string()),
            },
        }
    }

    /// Returns the parsed date, treating missing and invalid alike
    pub fn as_date(&self) -> Option<CalendarDate> {
        match self {
            DateInput::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DateInput::Missing)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DateInput::Invalid(_))
    }
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<Option<CalendarDate>> for DateInput {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(DateInput::Missing, DateInput::Date)
    }
}

/// Conversion of any day-granularity-capable value into a calendar date
///
/// Returns `None` for values that do not denote a date, so callers can treat
/// them as absent.
pub trait IntoCalendarDate {
    fn into_calendar_date(self) -> Option<CalendarDate>;
}

impl IntoCalendarDate for NaiveDate {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        Some(self)
    }
}

impl IntoCalendarDate for &NaiveDate {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        Some(*self)
    }
}

impl IntoCalendarDate for NaiveDateTime {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> IntoCalendarDate for DateTime<Tz> {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        Some(self.date_naive())
    }
}

impl IntoCalendarDate for &str {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        parse_calendar_date(self).ok()
    }
}

impl IntoCalendarDate for String {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        parse_calendar_date(&self).ok()
    }
}

impl IntoCalendarDate for &String {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        parse_calendar_date(self).ok()
    }
}

impl IntoCalendarDate for DateInput {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        self.as_date()
    }
}

impl<T: IntoCalendarDate> IntoCalendarDate for Option<T> {
    fn into_calendar_date(self) -> Option<CalendarDate> {
        self.and_then(IntoCalendarDate::into_calendar_date)
    }
}
