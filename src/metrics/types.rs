//! Metrics type definitions
//!
//! Contains the date range values consumed by the engine and the metrics
//! bundle it produces.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, IntoCalendarDate};

/// Caller-supplied blocked range
///
/// Either endpoint may be absent, and the end may precede the start. Such
/// ranges are invalid and are skipped by every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DateRange {
    /// First blocked day (inclusive)
    pub start: Option<CalendarDate>,

    /// Last blocked day (inclusive)
    pub end: Option<CalendarDate>,
}

impl DateRange {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// Builds a range from any date-like endpoints; unparseable endpoints become absent
    pub fn from_inputs(start: impl IntoCalendarDate, end: impl IntoCalendarDate) -> Self {
        Self {
            start: start.into_calendar_date(),
            end: end.into_calendar_date(),
        }
    }

    /// Returns the checked span if both endpoints are present and `end >= start`
    pub fn span(&self) -> Option<DateSpan> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateSpan::new(start, end),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.span().is_some()
    }
}

impl From<DateSpan> for DateRange {
    fn from(span: DateSpan) -> Self {
        Self {
            start: Some(span.start),
            end: Some(span.end),
        }
    }
}

/// Inclusive date interval known to satisfy `end >= start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DateSpan {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateSpan {
    /// Returns `None` when `end < start`
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    /// Single-day span
    pub fn single(day: CalendarDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Inclusive day count; a single-day span has length 1
    pub fn len_days(&self) -> u32 {
        let diff = self.end.signed_duration_since(self.start).num_days();
        u32::try_from(diff + 1).unwrap_or(u32::MAX)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Overlapping part of two spans, if any
    pub fn intersect(&self, other: &DateSpan) -> Option<DateSpan> {
        DateSpan::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Whether `other` starts no later than the day after this span ends
    ///
    /// Assumes `other.start >= self.start`, as in a sorted merge scan.
    pub(crate) fn touches(&self, other: &DateSpan) -> bool {
        match self.end.checked_add_days(Days::new(1)) {
            Some(next_day) => other.start <= next_day,
            // self.end is the last representable date, nothing can start after it
            None => true,
        }
    }

    /// Moves the end forward to `end` if that lies later
    pub(crate) fn extend_to(&mut self, end: CalendarDate) {
        self.end = self.end.max(end);
    }

    /// Iterates every day of the span in order
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Blocked spans after normalization
///
/// Sorted ascending by start, pairwise disjoint, and non-adjacent: for every
/// consecutive pair, `a.end + 1 day < b.start`. Only produced by
/// [`normalize_blocked_ranges`](super::ranges::normalize_blocked_ranges).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedBlockedSet {
    spans: Vec<DateSpan>,
}

impl NormalizedBlockedSet {
    pub(crate) fn from_sorted_disjoint(spans: Vec<DateSpan>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[DateSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// True if `date` lies inside any blocked span (inclusive)
    pub fn contains(&self, date: CalendarDate) -> bool {
        // First span starting after `date`; only its predecessor can contain it
        let idx = self.spans.partition_point(|span| span.start <= date);
        idx > 0 && self.spans[idx - 1].end >= date
    }

    /// Total blocked days across all spans
    pub fn total_days(&self) -> u32 {
        self.spans.iter().map(DateSpan::len_days).sum()
    }

    /// Converts back to caller-shaped ranges
    pub fn to_ranges(&self) -> Vec<DateRange> {
        self.spans.iter().copied().map(DateRange::from).collect()
    }
}

impl<'a> IntoIterator for &'a NormalizedBlockedSet {
    type Item = &'a DateSpan;
    type IntoIter = std::slice::Iter<'a, DateSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Measurement horizon of an issue: start date through closed date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IssueWindow {
    span: DateSpan,
}

impl IssueWindow {
    /// Returns `None` if either date is absent or the end precedes the start
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Option<Self> {
        let span = DateRange::new(start, end).span()?;
        Some(Self { span })
    }

    pub fn start(&self) -> CalendarDate {
        self.span.start
    }

    pub fn end(&self) -> CalendarDate {
        self.span.end
    }

    pub fn span(&self) -> DateSpan {
        self.span
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.span.contains(date)
    }

    /// Inclusive day count of the window
    pub fn total_days(&self) -> u32 {
        self.span.len_days()
    }
}

/// Classification of a single day under the precedence rule
///
/// `weekend` and `holiday` are never set on a blocked day. A non-blocked
/// holiday falling on a weekend sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DayClassification {
    pub blocked: bool,
    pub weekend: bool,
    pub holiday: bool,
}

impl DayClassification {
    /// Plain working day: none of the categories apply
    pub fn is_working_day(&self) -> bool {
        !self.blocked && !self.weekend && !self.holiday
    }
}

/// Issue lifecycle metrics
///
/// Computed fresh on every call; all counts are inclusive day counts
/// clipped to the issue window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsResult {
    /// Calendar days from start to closed date, both included
    pub total_days: u32,

    /// Days covered by blocked ranges
    pub blocked_days: u32,

    /// Saturdays and Sundays that are not blocked
    pub weekend_days: u32,

    /// Holidays that are not blocked
    pub holiday_days: u32,

    /// Total minus blocked minus holidays; weekends still count
    pub age_of_issue: u32,

    /// Age of issue minus weekends
    pub time_to_resolve: u32,
}

#[cfg(test)]
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd_opt(year, month, day).expect("valid test date")
}
