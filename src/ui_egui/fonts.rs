//! Font setup for chip titles.
//!
//! egui ships no bold face, so the bold title family is bound to a bold
//! system font when one can be found. Without one it is bound to the
//! proportional fonts, which keeps the family valid for layout.

use std::path::Path;

use egui::{FontData, FontDefinitions, FontFamily};

/// Family name used for the bold title span.
pub const BOLD_FAMILY: &str = "bold";

const BOLD_FONT_KEY: &str = "chip-bold";

/// Bold faces tried in order; the first readable file wins.
const BOLD_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/ubuntu/Ubuntu-B.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub fn bold_family() -> FontFamily {
    FontFamily::Name(BOLD_FAMILY.into())
}

/// Default egui fonts plus the bold title family.
///
/// With `bold_face` the family uses it first and falls back to the
/// proportional fonts for missing glyphs; without it the family is an
/// alias of the proportional fonts.
pub fn chip_font_definitions(bold_face: Option<Vec<u8>>) -> FontDefinitions {
    let mut definitions = FontDefinitions::default();
    let mut bold_fonts = definitions
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    if let Some(bytes) = bold_face {
        definitions
            .font_data
            .insert(BOLD_FONT_KEY.to_owned(), FontData::from_owned(bytes));
        bold_fonts.insert(0, BOLD_FONT_KEY.to_owned());
    }

    definitions.families.insert(bold_family(), bold_fonts);
    definitions
}

fn load_bold_face() -> Option<Vec<u8>> {
    BOLD_FONT_CANDIDATES.iter().find_map(|candidate| {
        let path = Path::new(candidate);
        match std::fs::read(path) {
            Ok(bytes) => {
                log::debug!("Using bold title font {:?}", path);
                Some(bytes)
            }
            Err(_) => None,
        }
    })
}

/// Install the chip fonts on `ctx` and return the registered families.
///
/// The fonts take effect from the next frame, so the returned list is what
/// callers should check styles against during app creation.
pub fn install_chip_fonts(ctx: &egui::Context) -> Vec<FontFamily> {
    let bold_face = load_bold_face();
    if bold_face.is_none() {
        log::warn!("No bold system font found, chip titles use the regular face");
    }

    let definitions = chip_font_definitions(bold_face);
    let families = definitions.families.keys().cloned().collect();
    ctx.set_fonts(definitions);
    families
}
