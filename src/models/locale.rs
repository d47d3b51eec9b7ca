//! Dutch day and month name tables.
//!
//! The calendar displays a single fixed language. These static lookup tables
//! are a presentation concern only; nothing in the calculation path depends
//! on them.

use chrono::{Datelike, NaiveDate, Weekday};

/// Dutch weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

/// Dutch month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Returns the Dutch name for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Returns the Dutch name for a 1-based month number.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`; callers pass months taken from a
/// `NaiveDate`, which are always valid.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Formats a date span as `"D–D maand"` when both dates fall in the same
/// month, or `"D maand – D maand"` when the span straddles a month boundary.
///
/// # Examples
///
/// ```
/// use shift_calendar_engine::models::locale::format_date_span;
/// use chrono::NaiveDate;
///
/// let min = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let max = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
/// assert_eq!(format_date_span(min, max), "2–8 juni");
/// ```
pub fn format_date_span(min: NaiveDate, max: NaiveDate) -> String {
    if min.month() == max.month() {
        format!("{}–{} {}", min.day(), max.day(), month_name(min.month()))
    } else {
        format!(
            "{} {} – {} {}",
            min.day(),
            month_name(min.month()),
            max.day(),
            month_name(max.month())
        )
    }
}
