// Rust Date Picker Library
// Grid building and view navigation for a calendar date picker

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::CalendarError;
pub use models::calendar_date::{CalendarDate, MonthIndex};
pub use models::settings::PickerSettings;
pub use models::view::ViewMode;
pub use services::grid::{build_grid, CellDescriptor, Grid};
pub use services::navigation::{transition, NavigationEvent, NavigationState};
pub use services::picker::{Clock, DatePicker, FixedClock, SystemClock};
