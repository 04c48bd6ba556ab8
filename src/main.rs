// Rust Date Picker
// Demo host entry point

use anyhow::{anyhow, Result};
use rust_date_picker::models::settings::PickerSettings;
use rust_date_picker::services::settings::SettingsService;
use rust_date_picker::ui_egui::PickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Date Picker");

    let settings = load_settings_or_default();
    let app = PickerApp::new(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([300.0, 380.0])
            .with_min_inner_size([260.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Picker",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run date picker window: {}", e))
}

fn load_settings_or_default() -> PickerSettings {
    match SettingsService::from_project_dirs().and_then(|service| service.get()) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Falling back to default settings: {:#}", e);
            PickerSettings::default()
        }
    }
}
