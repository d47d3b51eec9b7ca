//! ISO-week grouping of day results.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{DayResult, WeekGroup};

/// Groups a month's day results by ISO (year, week).
///
/// Groups come back in ascending (ISO year, week) order; within a group the
/// input date order is preserved. Every input day lands in exactly one group,
/// so concatenating the groups reconstructs the month's date sequence.
///
/// The ISO year is used as the primary key on purpose: the last days of
/// December can belong to week 1 of the next ISO year and must sort after
/// week 52/53.
pub fn group_by_week(results: &[DayResult]) -> Vec<WeekGroup> {
    let mut groups: BTreeMap<(i32, u32), WeekGroup> = BTreeMap::new();

    for result in results {
        let iso = result.date.iso_week();
        groups
            .entry((iso.year(), iso.week()))
            .and_modify(|group| {
                group.first_date = group.first_date.min(result.date);
                group.last_date = group.last_date.max(result.date);
                group.days.push(result.clone());
            })
            .or_insert_with(|| WeekGroup {
                iso_year: iso.year(),
                week: iso.week(),
                first_date: result.date,
                last_date: result.date,
                days: vec![result.clone()],
            });
    }

    groups.into_values().collect()
}
