//! Resolved chip style.
//!
//! `ChipStyle` is the per-render view of [`ChipSettings`]: colors parsed to
//! `Color32`, font sizes turned into egui `FontId`s. It is cheap to clone and
//! may change between frames (e.g. a light/dark switch) without rebuilding
//! any chips.

use egui::{Color32, FontFamily, FontId};

use crate::models::settings::{ChipSettings, SettingsError};
use crate::ui_egui::fonts::bold_family;
use crate::utils::color::parse_color;

#[derive(Debug, Clone, PartialEq)]
pub struct ChipStyle {
    pub corner_radius: f32,
    pub padding: f32,

    /// Fill used by events without their own color
    pub default_color: Color32,

    /// Text color used by events without their own text color
    pub text_color: Color32,

    /// Font for the bold title span
    pub title_font: FontId,

    /// Font for the plain location span
    pub location_font: FontId,
}

impl ChipStyle {
    pub fn light() -> Self {
        Self {
            corner_radius: 6.0,
            padding: 4.0,
            default_color: Color32::from_rgb(100, 150, 200),
            text_color: Color32::WHITE,
            title_font: FontId::new(12.0, bold_family()),
            location_font: FontId::proportional(12.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            default_color: Color32::from_rgb(60, 95, 140),
            text_color: Color32::from_rgb(240, 240, 240),
            ..Self::light()
        }
    }

    /// Resolve stored settings into a style
    pub fn from_settings(settings: &ChipSettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let default_color =
            parse_color(&settings.default_color).ok_or_else(|| SettingsError::InvalidColor {
                field: "default",
                value: settings.default_color.clone(),
            })?;
        let text_color =
            parse_color(&settings.text_color).ok_or_else(|| SettingsError::InvalidColor {
                field: "text",
                value: settings.text_color.clone(),
            })?;

        let title_family = match &settings.title_font_family {
            Some(name) => FontFamily::Name(name.as_str().into()),
            None => bold_family(),
        };

        Ok(Self {
            corner_radius: settings.corner_radius,
            padding: settings.padding,
            default_color,
            text_color,
            title_font: FontId::new(settings.font_size, title_family),
            location_font: FontId::proportional(settings.font_size),
        })
    }

    /// Replace fonts whose family is not in `families` with the
    /// proportional family at the same size.
    pub fn with_available_fonts(mut self, families: &[FontFamily]) -> Self {
        for font in [&mut self.title_font, &mut self.location_font] {
            if !families.contains(&font.family) {
                log::warn!(
                    "Font family {:?} is not registered, using proportional",
                    font.family
                );
                *font = FontId::proportional(font.size);
            }
        }
        self
    }
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self::light()
    }
}
