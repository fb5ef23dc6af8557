//! Paints a chip: fill, border, continuation corners, then title.

use egui::{Color32, Pos2, Rect, Stroke};

use super::fitter::{FittedText, TextMeasurer, TitleFitter};
use super::geometry::{
    border_inset_rect, border_strip_rect, bottom_strip_rect, interior_rect, top_strip_rect, Edge,
};
use super::label::{ChipLabel, LabelStyle};
use super::EventChip;
use crate::ui_egui::theme::ChipStyle;

/// Drawing primitives a chip needs from its target.
pub trait ChipSurface {
    /// Backend text block, as produced by the matching [`TextMeasurer`].
    type TextBlock;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color32);

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: Stroke);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draw `text` with its own top-left corner placed at `origin`.
    fn draw_text(&mut self, origin: Pos2, text: &FittedText<Self::TextBlock>);
}

/// Fill, border and continuation corners.
pub(crate) fn draw_body<T, S: ChipSurface>(
    chip: &EventChip<T>,
    bounds: Rect,
    style: &ChipStyle,
    surface: &mut S,
) {
    let event = &chip.event;
    let radius = style.corner_radius;
    let fill = event.color_or_default(style);

    surface.fill_rounded_rect(bounds, radius, fill);

    if event.has_border() {
        let border_width = event.style.border_width;
        match border_inset_rect(bounds, border_width) {
            Some(inset) => surface.stroke_rounded_rect(
                inset,
                radius,
                Stroke::new(border_width, event.style.border_color),
            ),
            None => log::trace!("Border inset of event {} is degenerate", event.id),
        }
    }

    if chip.original_event.is_multi_day() && event.is_not_all_day() {
        draw_continuation_corners(chip, bounds, radius, fill, surface);
    }
}

/// Square off and un-border the edges where a multi-day event continues
/// into the previous or next day.
fn draw_continuation_corners<T, S: ChipSurface>(
    chip: &EventChip<T>,
    bounds: Rect,
    radius: f32,
    fill: Color32,
    surface: &mut S,
) {
    let event = &chip.event;
    let original = chip.original_event.as_ref();
    let continues_from_previous = event.starts_on_earlier_day(original);
    let continues_to_next = event.ends_on_later_day(original);

    if continues_from_previous {
        surface.fill_rect(top_strip_rect(bounds, radius), fill);
    }
    if continues_to_next {
        surface.fill_rect(bottom_strip_rect(bounds, radius), fill);
    }

    if !event.has_border() {
        return;
    }

    let border_width = event.style.border_width;
    if continues_from_previous {
        surface.fill_rect(border_strip_rect(bounds, Edge::Top, border_width), fill);
    }
    if continues_to_next {
        surface.fill_rect(border_strip_rect(bounds, Edge::Bottom, border_width), fill);
    }
}

/// Fit the chip's label into its interior. `None` when nothing can be drawn.
pub(crate) fn fit_title<T, M: TextMeasurer>(
    chip: &EventChip<T>,
    bounds: Rect,
    style: &ChipStyle,
    measurer: &M,
) -> Option<FittedText<M::Block>> {
    let interior = interior_rect(bounds, style.padding)?;
    let label = ChipLabel::from_event(&chip.event);
    let label_style = LabelStyle::for_event(&chip.event, style);
    TitleFitter::new(measurer).fit(&label, &label_style, interior)
}

/// Draw an already fitted title at the interior's top-left corner.
pub(crate) fn draw_title<S: ChipSurface>(
    bounds: Rect,
    style: &ChipStyle,
    text: &FittedText<S::TextBlock>,
    surface: &mut S,
) {
    match interior_rect(bounds, style.padding) {
        Some(interior) => surface.draw_text(interior.left_top(), text),
        None => log::trace!("No interior for title at {:?}", bounds),
    }
}
