//! ISO-week grouping model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayResult;
use super::locale::format_date_span;

/// One ISO week's worth of day results within a month.
///
/// A group holds the days of a single month that fall into one ISO
/// (year, week) bucket; at a month boundary a group may cover fewer than
/// seven days. Groups are a derived view and are recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGroup {
    /// The ISO week-numbering year (differs from the calendar year around
    /// New Year).
    pub iso_year: i32,
    /// The ISO week number within `iso_year`.
    pub week: u32,
    /// The earliest date in the group.
    pub first_date: NaiveDate,
    /// The latest date in the group.
    pub last_date: NaiveDate,
    /// The day results in ascending date order.
    pub days: Vec<DayResult>,
}

impl WeekGroup {
    /// Formats the group's date span for display, e.g. `"2–8 juni"` or
    /// `"30 juni – 6 juli"` when the ISO week straddles a month boundary.
    pub fn date_span_label(&self) -> String {
        format_date_span(self.first_date, self.last_date)
    }
}
