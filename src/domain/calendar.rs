//! Calendar month grid
//!
//! Plain Gregorian layout for the calendar view. Lunar data is never
//! computed here; it comes from the oracle per clicked day.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Cells in a month grid (6 weeks of 7 days)
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// The Gregorian date of the cell
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month
    pub is_current_month: bool,
    /// Whether the cell is today (only marked inside the displayed month)
    pub is_today: bool,
}

/// Build the 42-cell grid for `year`/`month`, weeks starting on Sunday
///
/// Leading cells are filled from the previous month, trailing cells from
/// the next one. Returns `None` for an invalid month.
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Option<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(offset))?;

    let days = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let is_current_month = date.year() == year && date.month() == month;
            CalendarDay {
                date,
                is_current_month,
                is_today: is_current_month && date == today,
            }
        })
        .collect::<Vec<_>>();

    (days.len() == GRID_CELLS).then_some(days)
}
