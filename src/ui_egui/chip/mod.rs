//! Event chips: the rectangles that represent an event, or one day of a
//! multi-day event, on the week grid.
//!
//! A chip owns its segment event and shares the original event with its
//! sibling segments. Its bounds are assigned by the grid layout pass;
//! until then the chip neither renders nor reports hits.

use std::sync::Arc;

use egui::{Pos2, Rect};

use crate::models::event::Event;
use crate::ui_egui::theme::ChipStyle;

pub mod drawer;
pub mod egui_backend;
pub mod fitter;
pub mod geometry;
pub mod label;
pub mod recording;
pub mod text_cache;

pub use drawer::ChipSurface;
pub use egui_backend::EguiTextMeasurer;
pub use fitter::{FittedText, TextMeasurer, TitleFitter};
pub use label::{ChipLabel, LabelStyle};
pub use text_cache::ChipTextCache;

#[derive(Debug, Clone)]
pub struct EventChip<T> {
    /// The event as it applies to this chip (possibly a single day of it)
    pub event: Event<T>,
    /// The un-split event this chip was derived from
    pub original_event: Arc<Event<T>>,
    bounds: Option<Rect>,
}

impl<T> EventChip<T> {
    pub fn new(event: Event<T>, original_event: Arc<Event<T>>, bounds: Option<Rect>) -> Self {
        Self {
            event,
            original_event,
            bounds,
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Forget the layout result; the chip stops rendering and hit-testing
    /// until the next layout pass.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// True iff `pos` lies strictly inside the bounds. Points on an edge miss.
    pub fn is_hit(&self, pos: Pos2) -> bool {
        let Some(rect) = self.bounds else {
            return false;
        };

        pos.x > rect.left() && pos.x < rect.right() && pos.y > rect.top() && pos.y < rect.bottom()
    }

    /// Paint the chip onto `surface`.
    ///
    /// When `text` is given it is drawn as-is; otherwise the label is fitted
    /// against the current interior with `measurer`. Degenerate geometry
    /// and labels that do not fit are skipped silently.
    pub fn render<S, M>(
        &self,
        style: &ChipStyle,
        surface: &mut S,
        measurer: &M,
        text: Option<&FittedText<S::TextBlock>>,
    ) where
        S: ChipSurface,
        M: TextMeasurer<Block = S::TextBlock>,
    {
        let Some(bounds) = self.bounds else {
            return;
        };

        drawer::draw_body(self, bounds, style, surface);

        match text {
            Some(text) => drawer::draw_title(bounds, style, text, surface),
            None => {
                if let Some(fitted) = drawer::fit_title(self, bounds, style, measurer) {
                    drawer::draw_title(bounds, style, &fitted, surface);
                }
            }
        }
    }

    /// Like [`Self::render`], but takes the title from `cache`, fitting it
    /// only when the chip's interior changed since the last frame.
    pub fn render_cached<S, M>(
        &self,
        style: &ChipStyle,
        surface: &mut S,
        measurer: &M,
        cache: &mut ChipTextCache<S::TextBlock>,
    ) where
        S: ChipSurface,
        M: TextMeasurer<Block = S::TextBlock>,
    {
        let Some(bounds) = self.bounds else {
            return;
        };

        drawer::draw_body(self, bounds, style, surface);

        if let Some(text) = cache.fitted_text(self, style, measurer) {
            drawer::draw_title(bounds, style, text, surface);
        }
    }
}
