//! Metrics calculation logic
//!
//! Day counting over an issue window. Every function is pure and total:
//! missing dates, inverted windows and invalid ranges yield zero instead of
//! an error.

use chrono::{Datelike, Weekday};
use log::debug;

use crate::holidays::HolidaySet;
use crate::models::CalendarDate;

use super::ranges::normalize_blocked_ranges;
use super::{DateRange, DayClassification, IssueWindow, MetricsResult, NormalizedBlockedSet};

/// Inclusive day count between two dates
///
/// Returns 0 if either date is absent or `end < start`; a single-day
/// issue spans 1 day.
pub fn total_days(start: Option<CalendarDate>, end: Option<CalendarDate>) -> u32 {
    IssueWindow::new(start, end).map_or(0, |window| window.total_days())
}

/// True if `date` falls inside any normalized blocked span
pub fn is_blocked(date: CalendarDate, blocked: &NormalizedBlockedSet) -> bool {
    blocked.contains(date)
}

/// Saturday or Sunday, independent of locale
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True if `date` is in the holiday set
pub fn is_holiday(date: CalendarDate, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Classifies a day, letting blocked status override weekend and holiday
pub fn classify_day(
    date: CalendarDate,
    blocked: &NormalizedBlockedSet,
    holidays: &HolidaySet,
) -> DayClassification {
    if is_blocked(date, blocked) {
        return DayClassification {
            blocked: true,
            ..Default::default()
        };
    }

    DayClassification {
        blocked: false,
        weekend: is_weekend(date),
        holiday: is_holiday(date, holidays),
    }
}

/// Blocked days inside `[start, end]`
///
/// Each normalized span is clipped to the window; spans are disjoint so
/// nothing is counted twice.
pub fn blocked_days(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked_ranges: &[DateRange],
) -> u32 {
    match IssueWindow::new(start, end) {
        Some(window) => count_blocked_days(&window, &normalize_blocked_ranges(blocked_ranges)),
        None => 0,
    }
}

/// Weekend days inside `[start, end]` that are not blocked
pub fn weekend_days(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked_ranges: &[DateRange],
) -> u32 {
    match IssueWindow::new(start, end) {
        Some(window) => count_weekend_days(&window, &normalize_blocked_ranges(blocked_ranges)),
        None => 0,
    }
}

/// Holidays inside `[start, end]` that are not blocked
///
/// # Arguments
/// * `holidays` - Holiday set, or `None` for the built-in default list.
///   An explicitly empty set counts no holidays.
pub fn holiday_days(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked_ranges: &[DateRange],
    holidays: Option<&HolidaySet>,
) -> u32 {
    match IssueWindow::new(start, end) {
        Some(window) => count_holiday_days(
            &window,
            &normalize_blocked_ranges(blocked_ranges),
            effective_holidays(holidays),
        ),
        None => 0,
    }
}

/// Total days minus blocked and holiday days, floored at 0
///
/// Weekends still count as elapsed time.
pub fn age_of_issue(total_days: u32, blocked_days: u32, holiday_days: u32) -> u32 {
    total_days
        .saturating_sub(blocked_days)
        .saturating_sub(holiday_days)
}

/// Age of issue further reduced by weekend days, floored at 0
pub fn time_to_resolve(
    total_days: u32,
    blocked_days: u32,
    holiday_days: u32,
    weekend_days: u32,
) -> u32 {
    age_of_issue(total_days, blocked_days, holiday_days).saturating_sub(weekend_days)
}

/// Calculates the full metrics bundle for an issue
///
/// # Arguments
/// * `start` - Issue start date
/// * `end` - Issue closed date
/// * `blocked_ranges` - Blocked ranges in any order; invalid ones are skipped
/// * `holidays` - Holiday set, or `None` for the built-in default list
///
/// # Returns
/// `None` when either date is absent or the window is inverted
pub fn calculate_issue_metrics(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    blocked_ranges: &[DateRange],
    holidays: Option<&HolidaySet>,
) -> Option<MetricsResult> {
    let window = IssueWindow::new(start, end)?;
    let normalized = normalize_blocked_ranges(blocked_ranges);
    Some(calculate_window_metrics(
        &window,
        &normalized,
        effective_holidays(holidays),
    ))
}

/// Calculates metrics for an already validated window and normalized set
pub fn calculate_window_metrics(
    window: &IssueWindow,
    blocked: &NormalizedBlockedSet,
    holidays: &HolidaySet,
) -> MetricsResult {
    let total_days = window.total_days();
    let blocked_days = count_blocked_days(window, blocked);
    let weekend_days = count_weekend_days(window, blocked);
    let holiday_days = count_holiday_days(window, blocked, holidays);

    let result = MetricsResult {
        total_days,
        blocked_days,
        weekend_days,
        holiday_days,
        age_of_issue: age_of_issue(total_days, blocked_days, holiday_days),
        time_to_resolve: time_to_resolve(total_days, blocked_days, holiday_days, weekend_days),
    };

    debug!(
        "Metrics for {}..={}: {:?}",
        window.start(),
        window.end(),
        result
    );

    result
}

fn effective_holidays(holidays: Option<&HolidaySet>) -> &HolidaySet {
    holidays.unwrap_or_else(|| HolidaySet::default_set())
}

fn count_blocked_days(window: &IssueWindow, blocked: &NormalizedBlockedSet) -> u32 {
    let window_span = window.span();
    blocked
        .spans()
        .iter()
        .filter_map(|span| span.intersect(&window_span))
        .map(|overlap| overlap.len_days())
        .sum()
}

fn count_weekend_days(window: &IssueWindow, blocked: &NormalizedBlockedSet) -> u32 {
    let count = window
        .span()
        .days()
        .filter(|day| is_weekend(*day) && !is_blocked(*day, blocked))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn count_holiday_days(
    window: &IssueWindow,
    blocked: &NormalizedBlockedSet,
    holidays: &HolidaySet,
) -> u32 {
    // HolidaySet is deduplicated, so each date counts once
    let count = holidays
        .between(window.start(), window.end())
        .filter(|day| !is_blocked(*day, blocked))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
