//! Unified error types
//!
//! Provides a single error type for the parsing, configuration and command
//! boundary. The calculation functions themselves never fail: malformed
//! input degrades to zero or empty results instead.

use serde::Serialize;
use thiserror::Error;

/// Reasons a proposed issue window is rejected by the validator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Start or end date was not supplied
    #[error("both dates are required")]
    MissingDates,

    /// Start or end date could not be parsed as a calendar date
    #[error("invalid date format")]
    InvalidFormat,

    /// End date precedes start date
    #[error("end date must be on or after start date")]
    EndBeforeStart,
}

/// Library-level error type
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A date string could not be parsed
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The issue window failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request payload is not valid JSON for the expected shape
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Configuration could not be serialized or deserialized
    #[error("configuration error: {0}")]
    Config(String),

    /// File operation error
    #[error("file operation error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable error response for the presentation layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl MetricsError {
    /// Create an InvalidDate error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Error code used in [`ErrorResponse`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Message shown to the user; validation errors surface their bare reason
    fn user_message(&self) -> String {
        match self {
            Self::Validation(reason) => reason.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<MetricsError> for ErrorResponse {
    fn from(err: MetricsError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.user_message(),
        }
    }
}

impl Serialize for MetricsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.user_message(),
        }
        .serialize(serializer)
    }
}
