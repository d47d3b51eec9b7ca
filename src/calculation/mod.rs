//! Calculation logic for the shift calendar engine.
//!
//! This module contains all the pure calculation functions: shift-code
//! normalization and splitting, minute-ceiling rounding, per-code and
//! per-day hour computation, month computation and blank-month construction,
//! ISO-week grouping, monthly summary aggregation, and the display
//! classification of day rows. Everything here is a stateless transformation
//! over its inputs; the active month and its entered values live with the
//! caller.

mod classification;
mod codes;
mod day_total;
mod month;
mod rounding;
mod shift_hours;
mod summary;
mod week_grouping;

pub use classification::{NIGHT_CODE, RowKind, classify_day};
pub use codes::{normalize_codes, split_codes};
pub use day_total::compute_day;
pub use month::{blank_month, compute_month, month_days};
pub use rounding::{ceil_to_minute, round_display};
pub use shift_hours::{code_hours, day_shift_hours};
pub use summary::summarize;
pub use week_grouping::group_by_week;
