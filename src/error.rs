// src/error.rs
//! Error types for configuration loading and filter input parsing.
//!
//! Filter parse errors never escape `CallFilter::apply`: they exist so the
//! parse-then-validate step stays explicit and testable, while `apply`
//! consumes them as the fail-open fallback.

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Rejection reason for a filter input string
#[derive(Debug, Error, PartialEq)]
pub enum FilterParseError {
    #[error("customer id is not an integer: {0:?}")]
    InvalidCustomerId(String),

    #[error("duration filter must be 'L' or 'G' followed by three digits: {0:?}")]
    MalformedDuration(String),

    #[error("expected four comma-space separated coordinates: {0:?}")]
    MalformedCoordinates(String),

    #[error("coordinate outside map bounds: {0}")]
    OutOfBounds(f64),

    #[error("search rectangle is degenerate")]
    DegenerateRectangle,
}
