//! Per-day entry and result models.
//!
//! A [`DayEntry`] is the raw user input for one calendar day; a [`DayResult`]
//! is its computed hour breakdown. Results are always derived, never stored
//! independently of their source entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw entered values for one calendar day of the active month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// Raw shift-code string as typed, e.g. `"D + bijs"`. May be empty.
    #[serde(default)]
    pub codes: String,
    /// Manually entered supplemental ("BIJS") hours. Must be non-negative.
    #[serde(default)]
    pub supplemental_hours: Decimal,
    /// Manually entered overtime in minutes. Must be non-negative.
    #[serde(default)]
    pub overtime_minutes: i64,
}

impl DayEntry {
    /// Creates the default blank entry for a date, as produced when a month
    /// is first opened: no codes, all numeric fields zero.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            codes: String::new(),
            supplemental_hours: Decimal::ZERO,
            overtime_minutes: 0,
        }
    }
}

/// The computed hour breakdown for one day.
///
/// All hour fields are expressed in hours rounded up to whole minutes, except
/// `total_hours` which carries the final 2-decimal display rounding. The
/// invariant `total_hours == round_dp_2(shift + supplemental + overtime)`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The calendar date this result belongs to.
    pub date: NaiveDate,
    /// The normalized shift-code tokens for the day, in entry order.
    pub codes: Vec<String>,
    /// Hours contributed by coded shifts, minute-ceiled.
    pub shift_hours: Decimal,
    /// Supplemental hours as stored, minute-ceiled.
    pub supplemental_hours: Decimal,
    /// Overtime converted from minutes to hours, minute-ceiled.
    pub overtime_hours: Decimal,
    /// Sum of the three components, rounded to 2 decimals for display.
    pub total_hours: Decimal,
}

/// Month-level sums across all day results, each to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Sum of all `total_hours`.
    pub total_hours: Decimal,
    /// Sum of all `overtime_hours`.
    pub overtime_hours: Decimal,
    /// Sum of all `supplemental_hours`.
    pub supplemental_hours: Decimal,
}
