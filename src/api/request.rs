//! Request types for the shift calendar API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DayEntry;

/// Request body for the `/calculate` endpoint.
///
/// Identifies a calendar month and carries the entered values for the days
/// the user touched. Omitted days are treated as blank entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar year.
    pub year: i32,
    /// The 1-based calendar month.
    pub month: u32,
    /// Entered day values; dates must fall inside the requested month.
    #[serde(default)]
    pub days: Vec<DayEntryRequest>,
}

/// One day's entered values in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntryRequest {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// Raw shift-code string as typed (e.g. `"D + bijs"`).
    #[serde(default)]
    pub codes: String,
    /// Supplemental ("BIJS") hours for the day.
    #[serde(default)]
    pub supplemental_hours: Decimal,
    /// Overtime for the day, in minutes.
    #[serde(default)]
    pub overtime_minutes: i64,
}

impl From<DayEntryRequest> for DayEntry {
    fn from(req: DayEntryRequest) -> Self {
        DayEntry {
            date: req.date,
            codes: req.codes,
            supplemental_hours: req.supplemental_hours,
            overtime_minutes: req.overtime_minutes,
        }
    }
}
