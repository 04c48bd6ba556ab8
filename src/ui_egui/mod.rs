// egui host for the date picker
// Demo window showing the header, weekday row and active grid

mod app;
mod date_picker;

pub use app::PickerApp;
pub use date_picker::show_date_picker;
