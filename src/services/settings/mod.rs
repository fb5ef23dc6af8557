// Settings service
// Loads and saves chip settings from a TOML file

mod service;

pub use service::SettingsService;
