//! Grid builder.
//!
//! Pure functions turning a reference date and view mode into the cells a
//! host renders. One builder per layout; [`build_grid`] only dispatches.

mod cells;

pub use cells::{CellDescriptor, DayCell, DayGrid, Grid, MonthCell, MonthGrid, YearCell, YearGrid};

use crate::models::calendar_date::{CalendarDate, MonthIndex};
use crate::models::view::ViewMode;
use crate::utils::date::{add_days, first_of_month, week_start};

/// Years shown before the reference year in the year grid.
pub const YEARS_BEFORE: i32 = 4;
/// Years shown after the reference year in the year grid.
pub const YEARS_AFTER: i32 = 7;

/// Build the grid for `view_mode`.
///
/// # Arguments
/// * `reference` - Anchors the month (Day), year (Month) or year range (Year) in view
/// * `selected` - The user's chosen date, if any
/// * `today` - Date flagged `is_today` in the day grid
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn build_grid(
    reference: CalendarDate,
    view_mode: ViewMode,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    first_day_of_week: u8,
) -> Grid {
    match view_mode {
        ViewMode::Day => Grid::Day(build_day_grid(reference, selected, today, first_day_of_week)),
        ViewMode::Month => Grid::Month(build_month_grid(reference, selected)),
        ViewMode::Year => Grid::Year(build_year_grid(reference)),
    }
}

/// Six full weeks starting on the week that contains the 1st of the
/// reference month.
pub fn build_day_grid(
    reference: CalendarDate,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    first_day_of_week: u8,
) -> DayGrid {
    let grid_start = week_start(first_of_month(reference), first_day_of_week);
    let cells = (0..ViewMode::Day.cell_count() as i64)
        .map(|offset| {
            let date = add_days(grid_start, offset);
            DayCell {
                date,
                is_today: date == today,
                is_selected: selected == Some(date),
                is_outside_current_month: !date.is_same_month(&reference),
            }
        })
        .collect();

    DayGrid {
        year: reference.year(),
        month: reference.month_index(),
        cells,
    }
}

/// January to December of the reference year.
///
/// A month is selected only when the selected date lies in the displayed
/// year and in that month.
pub fn build_month_grid(reference: CalendarDate, selected: Option<CalendarDate>) -> MonthGrid {
    let year = reference.year();
    let cells = MonthIndex::all()
        .map(|month| MonthCell {
            year,
            month,
            is_selected: selected
                .is_some_and(|s| s.year() == year && s.month0() == month.get()),
        })
        .collect();

    MonthGrid { year, cells }
}

/// Years `Y-4..=Y+7` around the reference year `Y`.
///
/// The highlighted year is the reference year, not the selected date's year.
// NOTE: this keying differs from the month grid, which highlights from the
// selected date. Kept as-is pending a product decision.
pub fn build_year_grid(reference: CalendarDate) -> YearGrid {
    let (start_year, end_year) = year_range(reference);
    let cells = (start_year..=end_year)
        .map(|year| YearCell {
            year,
            is_edge_of_range: year == start_year || year == end_year,
            is_selected: year == reference.year(),
        })
        .collect();

    YearGrid {
        start_year,
        end_year,
        cells,
    }
}

/// First and last year shown in the year grid for `reference`.
pub fn year_range(reference: CalendarDate) -> (i32, i32) {
    (reference.year() - YEARS_BEFORE, reference.year() + YEARS_AFTER)
}
