//! Holiday calendar
//!
//! A deduplicated set of holiday dates, plus the built-in default list used
//! when the caller supplies none.

use std::collections::BTreeSet;

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::{parse_calendar_date, CalendarDate, IntoCalendarDate};

/// Built-in holiday list (YYYY-MM-DD)
pub const DEFAULT_HOLIDAYS: [&str; 6] = [
    "2026-01-26", // Republic Day
    "2026-03-14", // Holi
    "2026-08-15", // Independence Day
    "2026-10-02", // Gandhi Jayanti
    "2026-10-24", // Diwali
    "2026-12-25", // Christmas
];

static DEFAULT_HOLIDAY_SET: Lazy<HolidaySet> =
    Lazy::new(|| HolidaySet::from_strings(DEFAULT_HOLIDAYS));

/// Set of holiday dates
///
/// Duplicates collapse on insert, so each date counts at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<CalendarDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default holidays
    pub fn default_set() -> &'static HolidaySet {
        &DEFAULT_HOLIDAY_SET
    }

    /// Builds a set from date strings, skipping entries that do not parse
    pub fn from_strings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            let raw = entry.as_ref();
            match parse_calendar_date(raw) {
                Ok(date) => {
                    set.insert(date);
                }
                Err(e) => warn!("Skipping holiday entry {:?}: {}", raw, e),
            }
        }
        set
    }

    /// Builds a set from any date-like values, skipping absent ones
    pub fn from_inputs<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCalendarDate,
    {
        entries
            .into_iter()
            .filter_map(IntoCalendarDate::into_calendar_date)
            .collect()
    }

    /// Adds a holiday; returns false if it was already present
    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending order
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }

    /// Holidays within `[start, end]`, ascending
    pub fn between(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> impl Iterator<Item = CalendarDate> + '_ {
        // BTreeSet::range panics on an inverted range
        let bounds = if start <= end { Some(start..=end) } else { None };
        bounds
            .into_iter()
            .flat_map(move |range| self.dates.range(range).copied())
    }
}

impl FromIterator<CalendarDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = CalendarDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<CalendarDate> for HolidaySet {
    fn extend<T: IntoIterator<Item = CalendarDate>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}
