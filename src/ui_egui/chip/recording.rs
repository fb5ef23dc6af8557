//! Headless backend: a surface that records draw calls and a fixed-pitch
//! text measurer.
//!
//! Used by tests and by tooling that needs chip output without a GPU
//! context, e.g. dumping the draw list of a week for inspection.

use egui::{Color32, Pos2, Rect, Stroke};

use super::drawer::ChipSurface;
use super::fitter::{FittedText, TextMeasurer};
use super::label::{ChipLabel, LabelStyle};

/// Lines of a text block laid out by [`MonospaceMeasurer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLines {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color32,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f32,
        stroke: Stroke,
    },
    FillRect {
        rect: Rect,
        color: Color32,
    },
    Text {
        origin: Pos2,
        lines: Vec<String>,
        height: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Rectangles filled with square corners, in draw order.
    pub fn filled_rects(&self) -> Vec<(Rect, Color32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl ChipSurface for RecordingSurface {
    type TextBlock = TextLines;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color32) {
        self.ops.push(DrawOp::FillRoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeRoundedRect {
            rect,
            radius,
            stroke,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, origin: Pos2, text: &FittedText<TextLines>) {
        self.ops.push(DrawOp::Text {
            origin,
            lines: text.block().lines.clone(),
            height: text.height(),
        });
    }
}

/// Every character is `char_width` wide and every line `line_height` tall.
/// Lines break at the last character that fits, not at word boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMeasurer {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    fn single_line_width(&self, label: &ChipLabel) -> f32 {
        label.char_count() as f32 * self.char_width
    }
}

impl TextMeasurer for MonospaceMeasurer {
    type Block = TextLines;

    fn measure(&self, label: &ChipLabel, _style: &LabelStyle, width: f32) -> FittedText<TextLines> {
        let per_line = ((width / self.char_width).floor() as usize).max(1);
        let chars: Vec<char> = label.text().chars().collect();
        let lines: Vec<String> = if chars.is_empty() {
            vec![String::new()]
        } else {
            chars
                .chunks(per_line)
                .map(|chunk| chunk.iter().collect())
                .collect()
        };

        let height = lines.len() as f32 * self.line_height;
        let line_count = lines.len();
        FittedText::new(TextLines { lines }, line_count, height)
    }

    fn ellipsize(&self, label: &ChipLabel, _style: &LabelStyle, available: f32) -> ChipLabel {
        label.ellipsize_with(available, |candidate| self.single_line_width(candidate))
    }
}
