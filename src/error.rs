//! Error types for the fitness tracker

use thiserror::Error;

/// Errors that can occur while reading packages or computing metrics
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown workout type: {0}")]
    InvalidKey(String),

    #[error("Invalid arguments for {code}: expected {expected} values, got {actual}")]
    InvalidArguments {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("Failed to parse package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
