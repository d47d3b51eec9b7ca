//! Per-day aggregation: raw entry in, computed [`DayResult`] out.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, DayResult};
use crate::registry::ShiftRegistry;

use super::codes::split_codes;
use super::rounding::{ceil_to_minute, round_display};
use super::shift_hours::day_shift_hours;

/// Computes the hour breakdown for one day entry.
///
/// Shift hours come from the entry's code tokens; supplemental hours are
/// stored minute-ceiled; overtime minutes are converted to minute-ceiled
/// hours; the total is the 2-decimal display rounding of the component sum.
///
/// # Errors
///
/// Negative supplemental hours or overtime minutes violate the caller
/// contract and fail fast with [`EngineError::InvalidInput`] rather than
/// being clamped. Everything else degrades to zero contributions.
pub fn compute_day(entry: &DayEntry, registry: &ShiftRegistry) -> EngineResult<DayResult> {
    if entry.supplemental_hours < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "supplemental_hours".to_string(),
            message: format!("must not be negative, got {}", entry.supplemental_hours),
        });
    }
    if entry.overtime_minutes < 0 {
        return Err(EngineError::InvalidInput {
            field: "overtime_minutes".to_string(),
            message: format!("must not be negative, got {}", entry.overtime_minutes),
        });
    }

    let codes = split_codes(&entry.codes);
    let shift_hours = day_shift_hours(&codes, registry);
    let supplemental_hours = ceil_to_minute(entry.supplemental_hours);
    let overtime_hours =
        ceil_to_minute(Decimal::from(entry.overtime_minutes) / Decimal::from(60));
    let total_hours = round_display(shift_hours + supplemental_hours + overtime_hours);

    Ok(DayResult {
        date: entry.date,
        codes,
        shift_hours,
        supplemental_hours,
        overtime_hours,
        total_hours,
    })
}
