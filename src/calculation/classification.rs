//! Display classification of day rows.
//!
//! Drives row coloring in the calendar only; the classification is derived
//! on demand and never stored on a result.

use serde::{Deserialize, Serialize};

use crate::models::DayResult;

/// The designated night-shift code; days carrying it get the night styling.
pub const NIGHT_CODE: &str = "n10";

/// The three-way display classification of a day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// The day contains the designated night-shift code.
    Night,
    /// No hours at all: a free day.
    Free,
    /// Any other day with hours.
    Shift,
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKind::Night => write!(f, "night"),
            RowKind::Free => write!(f, "free"),
            RowKind::Shift => write!(f, "shift"),
        }
    }
}

/// Classifies a computed day: night wins over everything, then a zero total
/// means free, everything else is a regular shift row.
pub fn classify_day(result: &DayResult) -> RowKind {
    if result.codes.iter().any(|code| code == NIGHT_CODE) {
        RowKind::Night
    } else if result.total_hours.is_zero() {
        RowKind::Free
    } else {
        RowKind::Shift
    }
}
