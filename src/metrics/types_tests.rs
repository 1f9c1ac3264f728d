//! Unit tests for metrics types
//!
//! Tests for DateRange, DateSpan, NormalizedBlockedSet, IssueWindow and MetricsResult.

use super::*;

// ===== DateRange Tests =====

#[test]
fn test_date_range_validity() {
    assert!(DateRange::new(Some(ymd(2026, 1, 1)), Some(ymd(2026, 1, 5))).is_valid());
    assert!(DateRange::new(Some(ymd(2026, 1, 5)), Some(ymd(2026, 1, 5))).is_valid());
    assert!(!DateRange::new(Some(ymd(2026, 1, 5)), Some(ymd(2026, 1, 4))).is_valid());
    assert!(!DateRange::new(None, Some(ymd(2026, 1, 4))).is_valid());
    assert!(!DateRange::new(Some(ymd(2026, 1, 4)), None).is_valid());
    assert!(!DateRange::default().is_valid());
}

#[test]
fn test_date_range_from_inputs() {
    let range = DateRange::from_inputs("2026-01-10", "2026-01-15T18:00:00");
    assert_eq!(range.span().unwrap().len_days(), 6);

    let broken = DateRange::from_inputs("2026-01-10", "later");
    assert_eq!(broken.start, Some(ymd(2026, 1, 10)));
    assert_eq!(broken.end, None);
    assert!(!broken.is_valid());
}

#[test]
fn test_date_range_deserialization() {
    let range: DateRange = serde_json::from_str(r#"{"start":"2026-01-10","end":null}"#).unwrap();
    assert_eq!(range.start, Some(ymd(2026, 1, 10)));
    assert_eq!(range.end, None);
}

// ===== DateSpan Tests =====

#[test]
fn test_date_span_rejects_inverted() {
    assert!(DateSpan::new(ymd(2026, 1, 2), ymd(2026, 1, 1)).is_none());
}

#[test]
fn test_date_span_len_is_inclusive() {
    assert_eq!(DateSpan::single(ymd(2026, 2, 28)).len_days(), 1);
    assert_eq!(DateSpan::new(ymd(2026, 1, 1), ymd(2026, 1, 31)).unwrap().len_days(), 31);
    // leap year
    assert_eq!(DateSpan::new(ymd(2028, 2, 1), ymd(2028, 3, 1)).unwrap().len_days(), 30);
}

#[test]
fn test_date_span_intersect() {
    let a = DateSpan::new(ymd(2026, 1, 1), ymd(2026, 1, 10)).unwrap();
    let b = DateSpan::new(ymd(2026, 1, 8), ymd(2026, 1, 20)).unwrap();
    let c = DateSpan::new(ymd(2026, 1, 11), ymd(2026, 1, 12)).unwrap();

    assert_eq!(a.intersect(&b), DateSpan::new(ymd(2026, 1, 8), ymd(2026, 1, 10)));
    assert_eq!(a.intersect(&c), None);
    assert_eq!(b.intersect(&c), Some(c));
}

#[test]
fn test_date_span_touches() {
    let a = DateSpan::new(ymd(2026, 1, 1), ymd(2026, 1, 5)).unwrap();
    assert!(a.touches(&DateSpan::new(ymd(2026, 1, 6), ymd(2026, 1, 10)).unwrap()));
    assert!(a.touches(&DateSpan::new(ymd(2026, 1, 3), ymd(2026, 1, 4)).unwrap()));
    assert!(!a.touches(&DateSpan::new(ymd(2026, 1, 7), ymd(2026, 1, 10)).unwrap()));
}

#[test]
fn test_date_span_days() {
    let span = DateSpan::new(ymd(2026, 12, 30), ymd(2027, 1, 2)).unwrap();
    let days: Vec<_> = span.days().collect();
    assert_eq!(
        days,
        vec![ymd(2026, 12, 30), ymd(2026, 12, 31), ymd(2027, 1, 1), ymd(2027, 1, 2)]
    );
}

#[test]
fn test_date_span_serialization() {
    let span = DateSpan::new(ymd(2026, 1, 10), ymd(2026, 1, 15)).unwrap();
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(json, r#"{"start":"2026-01-10","end":"2026-01-15"}"#);
}

// ===== NormalizedBlockedSet Tests =====

#[test]
fn test_normalized_set_contains() {
    let set = NormalizedBlockedSet::from_sorted_disjoint(vec![
        DateSpan::new(ymd(2026, 1, 5), ymd(2026, 1, 7)).unwrap(),
        DateSpan::single(ymd(2026, 1, 20)),
    ]);

    assert!(!set.contains(ymd(2026, 1, 4)));
    assert!(set.contains(ymd(2026, 1, 5)));
    assert!(set.contains(ymd(2026, 1, 7)));
    assert!(!set.contains(ymd(2026, 1, 8)));
    assert!(set.contains(ymd(2026, 1, 20)));
    assert!(!set.contains(ymd(2026, 1, 21)));
    assert_eq!(set.total_days(), 4);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_empty_normalized_set() {
    let set = NormalizedBlockedSet::default();
    assert!(set.is_empty());
    assert!(!set.contains(ymd(2026, 1, 1)));
    assert_eq!(set.total_days(), 0);
}

// ===== IssueWindow Tests =====

#[test]
fn test_issue_window_guards() {
    assert!(IssueWindow::new(None, Some(ymd(2026, 1, 1))).is_none());
    assert!(IssueWindow::new(Some(ymd(2026, 1, 2)), Some(ymd(2026, 1, 1))).is_none());

    let window = IssueWindow::new(Some(ymd(2026, 1, 1)), Some(ymd(2026, 1, 10))).unwrap();
    assert_eq!(window.start(), ymd(2026, 1, 1));
    assert_eq!(window.end(), ymd(2026, 1, 10));
    assert_eq!(window.total_days(), 10);
    assert!(window.contains(ymd(2026, 1, 10)));
    assert!(!window.contains(ymd(2026, 1, 11)));
}

// ===== DayClassification Tests =====

#[test]
fn test_day_classification_working_day() {
    assert!(DayClassification::default().is_working_day());
    let weekend = DayClassification {
        weekend: true,
        ..Default::default()
    };
    assert!(!weekend.is_working_day());
}

// ===== MetricsResult Tests =====

#[test]
fn test_metrics_result_default() {
    let result = MetricsResult::default();
    assert_eq!(result.total_days, 0);
    assert_eq!(result.age_of_issue, 0);
    assert_eq!(result.time_to_resolve, 0);
}

#[test]
fn test_metrics_result_serialization() {
    let result = MetricsResult {
        total_days: 10,
        blocked_days: 0,
        weekend_days: 3,
        holiday_days: 0,
        age_of_issue: 10,
        time_to_resolve: 7,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""total_days":10"#));
    assert!(json.contains(r#""weekend_days":3"#));
    assert!(json.contains(r#""time_to_resolve":7"#));

    let back: MetricsResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
