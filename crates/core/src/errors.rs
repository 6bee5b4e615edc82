//! Core error types for the habit tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whichever layer persists settings and
//! measurements.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use std::num::ParseIntError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker core.
///
/// Calculation failures keep their own typed enums (`DateError`,
/// `TargetError`) so callers can tell "bad input" apart from
/// "computation undefined" without matching on strings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Date calculation failed: {0}")]
    Date(#[from] DateError),

    #[error("Target calculation failed: {0}")]
    Target(#[from] TargetError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Errors raised by the effective-date calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day boundary hour is outside `0..=23`.
    #[error("Day boundary hour must be between 0 and 23, got {hour}")]
    InvalidConfiguration { hour: u32 },

    /// The end of a range lies before its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Errors raised by the target progress engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Start and goal coincide, so the trajectory has no slope.
    #[error("Degenerate target: {0}")]
    DegenerateTarget(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse number: {0}")]
    IntegerParse(#[from] ParseIntError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
