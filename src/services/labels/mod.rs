// Display labels for the picker header, weekday row and cells

use chrono::NaiveDate;

use crate::models::calendar_date::MonthIndex;
use crate::models::view::ViewMode;
use crate::services::grid::{year_range, CellDescriptor};
use crate::services::navigation::NavigationState;

const WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Header text for the active view: "February 2024", "2024" or "2020-2031".
pub fn header_label(state: &NavigationState) -> String {
    let reference = state.reference_date;
    match state.view_mode {
        ViewMode::Day => reference.as_naive().format("%B %Y").to_string(),
        ViewMode::Month => reference.year().to_string(),
        ViewMode::Year => {
            let (start_year, end_year) = year_range(reference);
            format!("{start_year}-{end_year}")
        }
    }
}

/// Two-letter weekday names, starting on `first_day_of_week` (0 = Sunday).
pub fn weekday_labels(first_day_of_week: u8) -> [&'static str; 7] {
    let mut labels = WEEKDAY_NAMES;
    labels.rotate_left(usize::from(first_day_of_week % 7));
    labels
}

/// Abbreviated month name ("Jan" ... "Dec").
pub fn month_label(month: MonthIndex) -> String {
    NaiveDate::from_ymd_opt(2000, month.get() + 1, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

/// Text shown inside a cell.
pub fn cell_label(cell: &CellDescriptor) -> String {
    match cell {
        CellDescriptor::Day(day) => day.date.day().to_string(),
        CellDescriptor::Month(month) => month_label(month.month),
        CellDescriptor::Year(year) => year.year.to_string(),
    }
}
