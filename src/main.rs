// Event Chips demo
// Main entry point

use anyhow::{anyhow, Context, Result};
use event_chips::services::settings::SettingsService;
use event_chips::ui_egui::fonts::install_chip_fonts;
use event_chips::ui_egui::{ChipDemoApp, ChipStyle};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Event Chips demo");

    let settings_path = SettingsService::default_path()?;
    let settings = SettingsService::new(settings_path)
        .load()
        .context("Failed to load chip settings")?;
    let style = ChipStyle::from_settings(&settings).context("Invalid chip settings")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Chips",
        options,
        Box::new(move |cc| {
            let families = install_chip_fonts(&cc.egui_ctx);
            let style = style.with_available_fonts(&families);
            Ok(Box::new(ChipDemoApp::new(style)))
        }),
    )
    .map_err(|e| anyhow!("Failed to run event chips demo: {}", e))
}
