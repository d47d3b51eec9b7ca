//! Monthly summary aggregation.

use rust_decimal::Decimal;

use crate::models::{DayResult, MonthSummary};

use super::rounding::round_display;

/// Sums total, overtime and supplemental hours across a month's results,
/// each reported to 2 decimal places.
pub fn summarize(results: &[DayResult]) -> MonthSummary {
    let total: Decimal = results.iter().map(|r| r.total_hours).sum();
    let overtime: Decimal = results.iter().map(|r| r.overtime_hours).sum();
    let supplemental: Decimal = results.iter().map(|r| r.supplemental_hours).sum();

    MonthSummary {
        total_hours: round_display(total),
        overtime_hours: round_display(overtime),
        supplemental_hours: round_display(supplemental),
    }
}
