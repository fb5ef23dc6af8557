//! egui backend: chips paint through `egui::Painter` and measure with the
//! context's fonts.

use std::sync::Arc;

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontFamily, FontId, Galley, Painter, Pos2, Rect, Rounding, Stroke};

use super::drawer::ChipSurface;
use super::fitter::{FittedText, TextMeasurer};
use super::label::{ChipLabel, LabelStyle};

impl ChipSurface for Painter {
    type TextBlock = Arc<Galley>;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color32) {
        self.rect_filled(rect, Rounding::same(radius), color);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: Stroke) {
        self.rect_stroke(rect, Rounding::same(radius), stroke);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.rect_filled(rect, Rounding::ZERO, color);
    }

    fn draw_text(&mut self, origin: Pos2, text: &FittedText<Arc<Galley>>) {
        // Span colors are baked into the galley.
        self.galley(origin, Arc::clone(text.block()), Color32::PLACEHOLDER);
    }
}

/// Measures labels with the fonts of an egui context.
///
/// The context must have run at least one frame so its fonts are loaded.
/// Fonts from families the context does not know are laid out with the
/// proportional family instead, since egui panics on unbound families.
#[derive(Clone)]
pub struct EguiTextMeasurer {
    ctx: egui::Context,
    families: Vec<FontFamily>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &egui::Context) -> Self {
        let families = ctx.fonts(|fonts| fonts.families());
        Self {
            ctx: ctx.clone(),
            families,
        }
    }

    fn resolve_font(&self, font: &FontId) -> FontId {
        if self.families.contains(&font.family) {
            font.clone()
        } else {
            log::trace!("Font family {:?} is not bound, laying out proportional", font.family);
            FontId::proportional(font.size)
        }
    }

    fn layout(&self, label: &ChipLabel, style: &LabelStyle, wrap_width: f32) -> Arc<Galley> {
        let style = LabelStyle {
            title_font: self.resolve_font(&style.title_font),
            location_font: self.resolve_font(&style.location_font),
            ..style.clone()
        };
        let job = layout_job(label, &style, wrap_width);
        self.ctx.fonts(|fonts| fonts.layout_job(job))
    }
}

fn layout_job(label: &ChipLabel, style: &LabelStyle, wrap_width: f32) -> LayoutJob {
    let strikethrough = if style.strike_through {
        Stroke::new(1.0, style.color)
    } else {
        Stroke::NONE
    };

    let mut job = LayoutJob::default();
    for span in label.spans() {
        job.append(
            &span.text,
            0.0,
            TextFormat {
                font_id: style.font_for(span.kind).clone(),
                color: style.color,
                strikethrough,
                ..Default::default()
            },
        );
    }
    job.wrap.max_width = wrap_width;
    job
}

impl TextMeasurer for EguiTextMeasurer {
    type Block = Arc<Galley>;

    fn measure(&self, label: &ChipLabel, style: &LabelStyle, width: f32) -> FittedText<Arc<Galley>> {
        let galley = self.layout(label, style, width);
        let line_count = galley.rows.len();
        let height = galley.size().y;
        FittedText::new(galley, line_count, height)
    }

    fn ellipsize(&self, label: &ChipLabel, style: &LabelStyle, available: f32) -> ChipLabel {
        label.ellipsize_with(available, |candidate| {
            self.layout(candidate, style, f32::INFINITY).size().x
        })
    }
}
