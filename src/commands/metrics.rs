//! Issue metrics commands
//!
//! Entry points for a presentation layer: raw form values in, a validated
//! metrics report or a serializable error out.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::holidays::{HolidayConfig, HolidaySet};
use crate::metrics::{
    calculator::calculate_window_metrics, normalize_blocked_ranges, validator::check_window,
    DateRange, MetricsResult, NormalizedBlockedSet, ValidationResult,
};
use crate::models::{CalendarDate, DateInput};

/// Blocked range as entered in the form; either side may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeInput {
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,
}

impl RangeInput {
    /// Converts to a date range; unparseable endpoints become absent
    pub fn to_date_range(&self) -> DateRange {
        DateRange::from_inputs(self.start.as_deref(), self.end.as_deref())
    }
}

/// Issue metrics request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IssueMetricsRequest {
    /// Issue start date (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,

    /// Issue closed date (YYYY-MM-DD)
    #[serde(default)]
    pub end_date: Option<String>,

    /// Blocked ranges, in any order
    #[serde(default)]
    pub blocked_ranges: Vec<RangeInput>,

    /// Holiday dates; `None` selects the configured defaults
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
}

impl IssueMetricsRequest {
    /// Parses a JSON request body
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Metrics report for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IssueMetricsReport {
    pub start_date: CalendarDate,

    pub end_date: CalendarDate,

    pub metrics: MetricsResult,

    /// Blocked spans after merging overlaps
    pub blocked_ranges: NormalizedBlockedSet,

    /// Holidays used for the calculation, sorted and deduplicated
    pub holidays: HolidaySet,
}

/// Validates the start/end pair of a request
pub fn validate_issue_window(request: &IssueMetricsRequest) -> ValidationResult {
    check_window(
        &DateInput::from_optional_str(request.start_date.as_deref()),
        &DateInput::from_optional_str(request.end_date.as_deref()),
    )
    .into()
}

/// Computes metrics for a request using the built-in holiday list as default
///
/// # Returns
/// The report, or a validation error if the window is missing, malformed or inverted
pub fn get_issue_metrics(
    request: &IssueMetricsRequest,
) -> Result<IssueMetricsReport, MetricsError> {
    get_issue_metrics_with_defaults(request, HolidaySet::default_set())
}

/// Computes metrics for a request, taking default holidays from configuration
pub fn get_issue_metrics_with_config(
    request: &IssueMetricsRequest,
    config: &HolidayConfig,
) -> Result<IssueMetricsReport, MetricsError> {
    get_issue_metrics_with_defaults(request, &config.to_holiday_set())
}

fn get_issue_metrics_with_defaults(
    request: &IssueMetricsRequest,
    default_holidays: &HolidaySet,
) -> Result<IssueMetricsReport, MetricsError> {
    let window = check_window(
        &DateInput::from_optional_str(request.start_date.as_deref()),
        &DateInput::from_optional_str(request.end_date.as_deref()),
    )?;

    let ranges: Vec<DateRange> = request
        .blocked_ranges
        .iter()
        .map(RangeInput::to_date_range)
        .collect();
    let blocked_ranges = normalize_blocked_ranges(&ranges);

    let holidays = match &request.holidays {
        Some(list) => HolidaySet::from_strings(list),
        None => default_holidays.clone(),
    };

    let metrics = calculate_window_metrics(&window, &blocked_ranges, &holidays);

    Ok(IssueMetricsReport {
        start_date: window.start(),
        end_date: window.end(),
        metrics,
        blocked_ranges,
        holidays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ymd;

    fn request(start: &str, end: &str) -> IssueMetricsRequest {
        IssueMetricsRequest {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_issue_metrics_from_json() {
        let json = r#"{
            "start_date": "2026-01-01",
            "end_date": "2026-01-31",
            "blocked_ranges": [
                {"start": "2026-01-12", "end": "2026-01-15"},
                {"start": "2026-01-10", "end": "2026-01-11"},
                {"start": "2026-01-20", "end": null}
            ],
            "holidays": []
        }"#;

        let request = IssueMetricsRequest::from_json(json).unwrap();
        let report = get_issue_metrics(&request).unwrap();

        assert_eq!(report.start_date, ymd(2026, 1, 1));
        assert_eq!(report.metrics.total_days, 31);
        assert_eq!(report.metrics.blocked_days, 6);
        assert_eq!(report.metrics.age_of_issue, 25);
        assert_eq!(report.blocked_ranges.len(), 1);
        assert!(report.holidays.is_empty());
    }

    #[test]
    fn test_default_holidays_when_omitted() {
        let mut req = request("2026-01-20", "2026-01-30");
        let report = get_issue_metrics(&req).unwrap();
        assert_eq!(report.metrics.holiday_days, 1);
        assert_eq!(&report.holidays, HolidaySet::default_set());

        req.blocked_ranges.push(RangeInput {
            start: Some("2026-01-26".into()),
            end: Some("2026-01-26".into()),
        });
        let report = get_issue_metrics(&req).unwrap();
        assert_eq!(report.metrics.holiday_days, 0);
        assert_eq!(report.metrics.blocked_days, 1);
    }

    #[test]
    fn test_configured_holidays() {
        let config = HolidayConfig {
            holidays: vec!["2026-01-05".to_string()],
        };
        let report =
            get_issue_metrics_with_config(&request("2026-01-01", "2026-01-10"), &config).unwrap();
        assert_eq!(report.metrics.holiday_days, 1);
        assert_eq!(report.metrics.age_of_issue, 9);
        assert_eq!(report.metrics.time_to_resolve, 6);
    }

    #[test]
    fn test_invalid_window_is_rejected() {
        let err = get_issue_metrics(&request("2026-01-10", "2026-01-01")).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("end date must be on or after start date"));

        let err = get_issue_metrics(&IssueMetricsRequest::default()).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::Validation(crate::error::ValidationError::MissingDates)
        ));
    }

    #[test]
    fn test_validate_issue_window() {
        assert!(validate_issue_window(&request("2026-01-01", "2026-01-01")).valid);
        let result = validate_issue_window(&request("2026-01-01", "01/02/2026"));
        assert_eq!(result.reason.as_deref(), Some("invalid date format"));
    }

    #[test]
    fn test_malformed_json_request() {
        let err = IssueMetricsRequest::from_json(r#"{"start_date": 5}"#).unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_report_serialization() {
        let mut req = request("2026-01-01", "2026-01-10");
        req.blocked_ranges.push(RangeInput {
            start: Some("2026-01-03".into()),
            end: Some("2026-01-04".into()),
        });
        req.holidays = Some(vec!["2026-01-08".into(), "bogus".into()]);

        let report = get_issue_metrics(&req).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["start_date"], "2026-01-01");
        assert_eq!(json["blocked_ranges"][0]["end"], "2026-01-04");
        assert_eq!(json["holidays"], serde_json::json!(["2026-01-08"]));
        assert_eq!(json["metrics"]["weekend_days"], 1);
        assert_eq!(json["metrics"]["time_to_resolve"], 6);
    }
}
