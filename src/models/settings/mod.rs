// Settings module
// Visual configuration for event chips, persisted as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::color::parse_color;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Corner radius must be zero or positive, got {0}")]
    NegativeCornerRadius(f32),
    #[error("Padding must be zero or positive, got {0}")]
    NegativePadding(f32),
    #[error("Font size must be positive, got {0}")]
    InvalidFontSize(f32),
    #[error("Invalid {field} color '{value}', expected #RRGGBB")]
    InvalidColor { field: &'static str, value: String },
}

/// User-editable chip appearance.
///
/// Colors are stored as hex strings so the file stays hand-editable;
/// [`crate::ui_egui::theme::ChipStyle::from_settings`] resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipSettings {
    pub corner_radius: f32,
    pub padding: f32,
    pub default_color: String,
    pub text_color: String,
    pub font_size: f32,
    /// Registered egui font family used for the title span.
    /// `None` uses the bold family installed at startup.
    pub title_font_family: Option<String>,
}

impl Default for ChipSettings {
    fn default() -> Self {
        Self {
            corner_radius: 6.0,
            padding: 4.0,
            default_color: "#6496C8".to_string(),
            text_color: "#FFFFFF".to_string(),
            font_size: 12.0,
            title_font_family: None,
        }
    }
}

impl ChipSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.corner_radius >= 0.0) {
            return Err(SettingsError::NegativeCornerRadius(self.corner_radius));
        }
        if !(self.padding >= 0.0) {
            return Err(SettingsError::NegativePadding(self.padding));
        }
        if !(self.font_size > 0.0) {
            return Err(SettingsError::InvalidFontSize(self.font_size));
        }
        if parse_color(&self.default_color).is_none() {
            return Err(SettingsError::InvalidColor {
                field: "default",
                value: self.default_color.clone(),
            });
        }
        if parse_color(&self.text_color).is_none() {
            return Err(SettingsError::InvalidColor {
                field: "text",
                value: self.text_color.clone(),
            });
        }
        Ok(())
    }
}
