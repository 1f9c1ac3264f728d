//! Issue window validation
//!
//! Advisory check for the presentation layer; the calculator guards
//! inverted or missing windows on its own.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{CalendarDate, DateInput};

use super::IssueWindow;

/// Outcome of validating a start/end pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidationResult {
    pub valid: bool,

    /// Human-readable reason when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            valid: false,
            reason: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::invalid(e),
        }
    }
}

/// Checks a start/end pair and builds the issue window
///
/// Missing dates are reported before malformed ones, and malformed ones
/// before an inverted order.
pub fn check_window(start: &DateInput, end: &DateInput) -> Result<IssueWindow, ValidationError> {
    if start.is_missing() || end.is_missing() {
        return Err(ValidationError::MissingDates);
    }

    let (Some(start), Some(end)) = (start.as_date(), end.as_date()) else {
        return Err(ValidationError::InvalidFormat);
    };

    IssueWindow::new(Some(start), Some(end)).ok_or(ValidationError::EndBeforeStart)
}

/// Validates raw date strings as typed into a form
pub fn validate_window(start: Option<&str>, end: Option<&str>) -> ValidationResult {
    check_window(
        &DateInput::from_optional_str(start),
        &DateInput::from_optional_str(end),
    )
    .into()
}

/// Validates already parsed dates
pub fn validate_dates(start: Option<CalendarDate>, end: Option<CalendarDate>) -> ValidationResult {
    check_window(&start.into(), &end.into()).into()
}
