//! Cell descriptors and the three grid layouts.
//!
//! Grids are only constructed by the builders in this module tree, so the
//! cell count of each layout always matches its `ViewMode`.

use serde::Serialize;

use crate::models::calendar_date::{CalendarDate, MonthIndex};
use crate::models::view::ViewMode;

/// One day in the 6x7 day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub is_today: bool,
    pub is_selected: bool,
    /// Leading/trailing days that belong to the neighbouring months
    pub is_outside_current_month: bool,
}

/// One month in the 3x4 month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub year: i32,
    pub month: MonthIndex,
    pub is_selected: bool,
}

/// One year in the 3x4 year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub year: i32,
    /// First and last years of the range, shown de-emphasized
    pub is_edge_of_range: bool,
    pub is_selected: bool,
}

/// A single cell of whichever layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum CellDescriptor {
    Day(DayCell),
    Month(MonthCell),
    Year(YearCell),
}

/// 42 consecutive days starting on the configured first day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGrid {
    pub(super) year: i32,
    pub(super) month: MonthIndex,
    pub(super) cells: Vec<DayCell>,
}

impl DayGrid {
    /// Year of the month being displayed.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month being displayed.
    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Weeks of seven days each.
    pub fn rows(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(ViewMode::Day.row_width())
    }
}

/// The twelve months of one year, January first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub(super) year: i32,
    pub(super) cells: Vec<MonthCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, MonthCell> {
        self.cells.chunks(ViewMode::Month.row_width())
    }
}

/// Twelve consecutive years, `start_year..=end_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGrid {
    pub(super) start_year: i32,
    pub(super) end_year: i32,
    pub(super) cells: Vec<YearCell>,
}

impl YearGrid {
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn cells(&self) -> &[YearCell] {
        &self.cells
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, YearCell> {
        self.cells.chunks(ViewMode::Year.row_width())
    }
}

/// The grid for exactly one view mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view")]
pub enum Grid {
    Day(DayGrid),
    Month(MonthGrid),
    Year(YearGrid),
}

impl Grid {
    pub fn view_mode(&self) -> ViewMode {
        match self {
            Grid::Day(_) => ViewMode::Day,
            Grid::Month(_) => ViewMode::Month,
            Grid::Year(_) => ViewMode::Year,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Grid::Day(grid) => grid.cells.len(),
            Grid::Month(grid) => grid.cells.len(),
            Grid::Year(grid) => grid.cells.len(),
        }
    }

    /// Always false for grids produced by the builders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells in display order.
    pub fn cells(&self) -> Vec<CellDescriptor> {
        match self {
            Grid::Day(grid) => grid.cells.iter().copied().map(CellDescriptor::Day).collect(),
            Grid::Month(grid) => grid.cells.iter().copied().map(CellDescriptor::Month).collect(),
            Grid::Year(grid) => grid.cells.iter().copied().map(CellDescriptor::Year).collect(),
        }
    }

    /// Cells grouped into presentation rows (7 per row for days, 4 otherwise).
    pub fn rows(&self) -> Vec<Vec<CellDescriptor>> {
        self.cells()
            .chunks(self.view_mode().row_width())
            .map(<[CellDescriptor]>::to_vec)
            .collect()
    }
}
