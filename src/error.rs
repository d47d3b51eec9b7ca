//! Error types for the shift calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the shift-code
//! registry or computing a month.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift calendar engine.
///
/// All fallible operations in the engine return this error type. Note that an
/// unknown shift code is deliberately *not* an error: it contributes zero
/// hours, matching how the calendar treats free days.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shiftcodes.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Registry file not found: /missing/shiftcodes.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Registry configuration file was not found at the specified path.
    #[error("Registry file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Registry configuration file could not be parsed.
    #[error("Failed to parse registry file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A numeric input violated the caller contract (e.g. negative hours).
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A day entry did not fit the month being calculated.
    #[error("Invalid entry for {date}: {message}")]
    InvalidEntry {
        /// The date of the offending entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
