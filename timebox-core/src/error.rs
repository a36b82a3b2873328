//! Error types for TimeBox.

use thiserror::Error;

/// Errors that can occur in TimeBox operations.
#[derive(Error, Debug)]
pub enum TimeboxError {
    #[error("Malformed timestamp '{value}': expected ISO-8601 local date-time")]
    MalformedTimestamp { value: String },

    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for TimeBox operations.
pub type TimeboxResult<T> = Result<T, TimeboxError>;
