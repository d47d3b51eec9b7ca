//! Shift-code definition model.
//!
//! This module defines the [`ShiftDefinition`] and [`ShiftKind`] types that
//! describe what a short shift code (e.g. `"d"`, `"n10"`, `"bijs"`) means.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// What a shift code contributes, independent of its display label.
///
/// The registry maps every code to either a timed shift (start/end times plus
/// an unpaid break) or a non-timed marker such as a training day, which
/// contributes zero shift hours regardless of any times on record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftKind {
    /// A shift with wall-clock start and end times.
    ///
    /// Either time may be absent while a code is still being set up; an
    /// incomplete timed definition contributes zero hours.
    Timed {
        /// The wall-clock start time of the shift.
        start: Option<NaiveTime>,
        /// The wall-clock end time of the shift. An end at or before the
        /// start means the shift runs past midnight.
        end: Option<NaiveTime>,
        /// Unpaid break duration in minutes, subtracted from the gross span.
        break_minutes: u32,
    },
    /// A marker code (training, paid-holiday recovery) with no timed hours.
    NonTimed,
}

impl ShiftKind {
    /// Returns the net worked minutes for this kind, before any rounding.
    ///
    /// For timed kinds this is the elapsed span from `start` to `end`
    /// (treating `end <= start` as crossing midnight) minus the break,
    /// floored at zero. Non-timed and incomplete timed kinds yield zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calendar_engine::models::ShiftKind;
    /// use chrono::NaiveTime;
    ///
    /// let night = ShiftKind::Timed {
    ///     start: NaiveTime::from_hms_opt(22, 0, 0),
    ///     end: NaiveTime::from_hms_opt(6, 0, 0),
    ///     break_minutes: 0,
    /// };
    /// assert_eq!(night.net_minutes(), 480); // 8.0 hours across midnight
    /// ```
    pub fn net_minutes(&self) -> i64 {
        match self {
            ShiftKind::Timed {
                start: Some(start),
                end: Some(end),
                break_minutes,
            } => {
                let mut span = (*end - *start).num_minutes();
                if span <= 0 {
                    span += 24 * 60;
                }
                (span - i64::from(*break_minutes)).max(0)
            }
            _ => 0,
        }
    }

    /// Returns true for kinds that can contribute timed hours.
    pub fn is_timed(&self) -> bool {
        matches!(self, ShiftKind::Timed { .. })
    }
}

/// A registered shift-code definition: a display label plus its [`ShiftKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Human-readable label shown in the calendar (e.g. "Bijscholing").
    pub label: String,
    /// What the code contributes.
    #[serde(flatten)]
    pub kind: ShiftKind,
}

impl ShiftDefinition {
    /// Creates a timed definition from `HH:MM`-style times.
    pub fn timed(
        label: impl Into<String>,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        break_minutes: u32,
    ) -> Self {
        Self {
            label: label.into(),
            kind: ShiftKind::Timed {
                start,
                end,
                break_minutes,
            },
        }
    }

    /// Creates a non-timed marker definition.
    pub fn non_timed(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ShiftKind::NonTimed,
        }
    }
}
