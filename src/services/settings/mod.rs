// Settings service module
// Loads and saves picker settings as a TOML file

mod service;

pub use service::SettingsService;
