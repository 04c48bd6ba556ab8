// Module exports for models

pub mod calendar_date;
pub mod settings;
pub mod view;
