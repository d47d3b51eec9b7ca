//! Month-level computation and blank-month construction.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, DayResult};
use crate::registry::ShiftRegistry;

use super::day_total::compute_day;

/// Returns the consecutive calendar days of a month, first through last.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `month` is not a valid
/// (year, month) combination.
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::InvalidInput {
            field: "month".to_string(),
            message: format!("{}-{:02} is not a valid month", year, month),
        }
    })?;

    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day.month() == month {
        days.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break, // end of the calendar range
        }
    }
    Ok(days)
}

/// Builds the default entries for a freshly opened month: one blank
/// [`DayEntry`] per calendar day.
pub fn blank_month(year: i32, month: u32) -> EngineResult<Vec<DayEntry>> {
    Ok(month_days(year, month)?
        .into_iter()
        .map(DayEntry::blank)
        .collect())
}

/// Computes the results for a month's ordered entries, one per entry,
/// preserving order.
pub fn compute_month(
    entries: &[DayEntry],
    registry: &ShiftRegistry,
) -> EngineResult<Vec<DayResult>> {
    entries
        .iter()
        .map(|entry| compute_day(entry, registry))
        .collect()
}
