//! Issue lifecycle metrics engine
//!
//! Computes day-granularity metrics for an issue from its start date, closed
//! date, blocked ranges and holidays.
//!
//! ## Architecture
//!
//! - **Range normalization**: blocked ranges are merged into sorted,
//!   disjoint, non-adjacent spans before any counting
//! - **Classification**: blocked status overrides weekend and holiday status
//! - **Aggregation**: blocked, weekend and holiday counts feed Age of Issue
//!   and Time to Resolve
//! - **Validation**: advisory start/end check for the presentation layer
//!
//! All functions are pure; the engine keeps no state between calls.

mod types;

#[cfg(test)]
mod types_tests;

pub use types::*;

/// Blocked range normalization
pub mod ranges;


/// Calculator module for day counts and metrics
pub mod calculator;


/// Start/end validation
pub mod validator;


pub use calculator::calculate_issue_metrics;
pub use ranges::normalize_blocked_ranges;
pub use validator::{validate_window, ValidationResult};
