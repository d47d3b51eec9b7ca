//! Response types for the shift calendar API.
//!
//! This module defines the calculation response envelope, the error response
//! structures, and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{RowKind, classify_day};
use crate::error::EngineError;
use crate::models::{DayResult, MonthSummary, WeekGroup, locale};

/// The complete response for a month calculation.
///
/// Wraps the computed weeks and summary in an envelope identifying the
/// calculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The calendar year that was calculated.
    pub year: i32,
    /// The 1-based calendar month that was calculated.
    pub month: u32,
    /// The computed day rows grouped by ISO week, ascending.
    pub weeks: Vec<WeekView>,
    /// Month-level totals.
    pub summary: MonthSummary,
}

/// One ISO week of computed rows, with its display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekView {
    /// The ISO week-numbering year.
    pub iso_year: i32,
    /// The ISO week number.
    pub week: u32,
    /// Display label for the group's date span, e.g. `"2–8 juni"`.
    pub label: String,
    /// The week's day rows in date order.
    pub days: Vec<DayRow>,
}

/// One computed day row, enriched with its display attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRow {
    /// The calendar date.
    pub date: NaiveDate,
    /// Dutch weekday name for the date.
    pub day_name: String,
    /// Normalized shift-code tokens.
    pub codes: Vec<String>,
    /// Row classification driving the calendar styling.
    pub kind: RowKind,
    /// Hours from coded shifts.
    pub shift_hours: rust_decimal::Decimal,
    /// Supplemental ("BIJS") hours.
    pub supplemental_hours: rust_decimal::Decimal,
    /// Overtime hours converted from minutes.
    pub overtime_hours: rust_decimal::Decimal,
    /// The day's display total.
    pub total_hours: rust_decimal::Decimal,
}

impl From<&DayResult> for DayRow {
    fn from(result: &DayResult) -> Self {
        DayRow {
            date: result.date,
            day_name: locale::day_name(result.date.weekday()).to_string(),
            codes: result.codes.clone(),
            kind: classify_day(result),
            shift_hours: result.shift_hours,
            supplemental_hours: result.supplemental_hours,
            overtime_hours: result.overtime_hours,
            total_hours: result.total_hours,
        }
    }
}

impl From<&WeekGroup> for WeekView {
    fn from(group: &WeekGroup) -> Self {
        WeekView {
            iso_year: group.iso_year,
            week: group.week,
            label: group.date_span_label(),
            days: group.days.iter().map(DayRow::from).collect(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Registry configuration error",
                    format!("Registry file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Registry parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input for '{}': {}", field, message),
                    "Numeric day inputs must be non-negative",
                ),
            },
            EngineError::InvalidEntry { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ENTRY",
                    format!("Invalid entry for {}: {}", date, message),
                    "Day entries must fall inside the requested month",
                ),
            },
        }
    }
}
