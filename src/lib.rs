// Issue Metrics Library
// Computes issue lifecycle metrics from start/closed dates, blocked ranges and holidays

pub mod commands;
pub mod error;
pub mod holidays;
pub mod metrics;
pub mod models;

pub use error::{ErrorResponse, MetricsError, ValidationError};
pub use holidays::{HolidayConfig, HolidaySet, DEFAULT_HOLIDAYS};
pub use metrics::{
    calculate_issue_metrics, normalize_blocked_ranges, validate_window, DateRange, DateSpan,
    IssueWindow, MetricsResult, NormalizedBlockedSet, ValidationResult,
};
pub use models::{parse_calendar_date, CalendarDate, DateInput, IntoCalendarDate};
