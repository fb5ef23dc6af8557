//! Fits a chip label into the chip interior by ellipsis truncation.

use egui::Rect;

use super::label::{ChipLabel, LabelStyle};

/// A laid-out text block together with its line count and pixel height.
///
/// `B` is the backend's block type (an egui galley, recorded lines, ...).
/// Callers may keep a `FittedText` across frames and pass it back to
/// [`super::EventChip::render`] to skip measuring.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText<B> {
    block: B,
    line_count: usize,
    height: f32,
}

impl<B> FittedText<B> {
    pub fn new(block: B, line_count: usize, height: f32) -> Self {
        Self {
            block,
            line_count,
            height,
        }
    }

    pub fn block(&self) -> &B {
        &self.block
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Text layout primitives supplied by the drawing backend.
pub trait TextMeasurer {
    type Block;

    /// Lay the label out in lines no wider than `width`.
    fn measure(&self, label: &ChipLabel, style: &LabelStyle, width: f32) -> FittedText<Self::Block>;

    /// Truncate the label with a trailing ellipsis so that, laid out on a
    /// single line, it is at most `available` pixels wide.
    fn ellipsize(&self, label: &ChipLabel, style: &LabelStyle, available: f32) -> ChipLabel;
}

pub struct TitleFitter<'a, M> {
    measurer: &'a M,
}

impl<'a, M: TextMeasurer> TitleFitter<'a, M> {
    pub fn new(measurer: &'a M) -> Self {
        Self { measurer }
    }

    /// Fit `label` into `interior`.
    ///
    /// Starts from the number of whole lines the interior can hold and
    /// truncates the label to `lines * width` pixels of single-line text,
    /// re-measuring at the full interior width after each truncation. The
    /// line budget drops by one until the block fits or reaches zero.
    ///
    /// Returns `None` for an empty label, a non-positive interior, or when
    /// not even one line fits.
    pub fn fit(
        &self,
        label: &ChipLabel,
        style: &LabelStyle,
        interior: Rect,
    ) -> Option<FittedText<M::Block>> {
        if label.is_empty() {
            return None;
        }

        let available_width = interior.width().floor();
        let available_height = interior.height().floor();
        if !(available_width > 0.0 && available_height > 0.0) {
            log::trace!(
                "Skipping title fit for {}x{} interior",
                available_width,
                available_height
            );
            return None;
        }

        let full = self.measurer.measure(label, style, available_width);
        let line_height = full.height() / full.line_count().max(1) as f32;
        if !(line_height > 0.0) || available_height < line_height {
            log::debug!(
                "No room for a single line (line height {}, available {})",
                line_height,
                available_height
            );
            return None;
        }

        let mut lines = (available_height / line_height).floor() as usize;
        while lines > 0 {
            let area = lines as f32 * available_width;
            let truncated = self.measurer.ellipsize(label, style, area);
            if truncated.is_empty() {
                // Not even the ellipsis fits; fewer lines will not help.
                break;
            }
            let fitted = self.measurer.measure(&truncated, style, available_width);
            log::trace!(
                "Fit attempt with {} lines: {} lines, height {} of {}",
                lines,
                fitted.line_count(),
                fitted.height(),
                available_height
            );
            if fitted.height() <= available_height {
                return Some(fitted);
            }
            lines -= 1;
        }

        log::debug!("Label '{}' does not fit at any truncation", label.text());
        None
    }
}
