//! Core data models for the shift calendar engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
pub mod locale;
mod shift_code;
mod week;

pub use day::{DayEntry, DayResult, MonthSummary};
pub use shift_code::{ShiftDefinition, ShiftKind};
pub use week::WeekGroup;
