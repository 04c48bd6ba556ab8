// View mode model
// Which of the three picker layouts is active

use serde::{Deserialize, Serialize};

/// Picker layout, ordered from shallowest to deepest drill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Day,
    Month,
    Year,
}

impl ViewMode {
    /// The next level reached by clicking the header; `None` at `Year`.
    pub fn drill_down(self) -> Option<ViewMode> {
        match self {
            ViewMode::Day => Some(ViewMode::Month),
            ViewMode::Month => Some(ViewMode::Year),
            ViewMode::Year => None,
        }
    }

    /// Number of cells per presentation row.
    pub fn row_width(self) -> usize {
        match self {
            ViewMode::Day => 7,
            ViewMode::Month | ViewMode::Year => 4,
        }
    }

    /// Total number of cells the layout always contains.
    pub fn cell_count(self) -> usize {
        match self {
            ViewMode::Day => 42,
            ViewMode::Month | ViewMode::Year => 12,
        }
    }
}
