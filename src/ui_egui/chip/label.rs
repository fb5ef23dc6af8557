//! Chip label text: a bold title span followed by a plain location span.

use egui::{Color32, FontId};

use crate::models::event::Event;
use crate::ui_egui::theme::ChipStyle;

pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Rendered with the title (bold) font
    Title,
    /// Rendered with the plain location font
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpan {
    pub text: String,
    pub kind: SpanKind,
}

/// Styled text of one chip, before line layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipLabel {
    spans: Vec<LabelSpan>,
}

impl ChipLabel {
    /// Title, then the location preceded by a space. The space belongs to
    /// the location span and is kept even without a title, so truncation
    /// points do not depend on whether a title is present. An event with
    /// neither part yields an empty label.
    pub fn new(title: Option<&str>, location: Option<&str>) -> Self {
        let mut spans = Vec::with_capacity(2);
        if let Some(title) = title {
            spans.push(LabelSpan {
                text: title.to_string(),
                kind: SpanKind::Title,
            });
        }
        if let Some(location) = location {
            spans.push(LabelSpan {
                text: format!(" {}", location),
                kind: SpanKind::Location,
            });
        }
        spans.retain(|span| !span.text.is_empty());
        Self { spans }
    }

    pub fn from_event<T>(event: &Event<T>) -> Self {
        Self::new(event.title.as_deref(), event.location.as_deref())
    }

    pub fn spans(&self) -> &[LabelSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }

    /// Unstyled text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// First `count` characters followed by an ellipsis, keeping span kinds.
    fn prefix_with_ellipsis(&self, count: usize) -> Self {
        let mut remaining = count;
        let mut spans = Vec::new();
        for span in &self.spans {
            if remaining == 0 {
                break;
            }
            let text: String = span.text.chars().take(remaining).collect();
            remaining -= text.chars().count();
            spans.push(LabelSpan {
                text,
                kind: span.kind,
            });
        }

        match spans.last_mut() {
            Some(last) => last.text.push(ELLIPSIS),
            None => spans.push(LabelSpan {
                text: ELLIPSIS.to_string(),
                kind: self.spans.first().map_or(SpanKind::Title, |span| span.kind),
            }),
        }
        Self { spans }
    }

    /// Truncate from the end so the single-line width, as reported by
    /// `width_of`, is at most `available` pixels.
    ///
    /// The label is returned unchanged when it already fits, and empty when
    /// not even the ellipsis fits. `width_of` must grow with the character
    /// count.
    pub fn ellipsize_with<F>(&self, available: f32, width_of: F) -> Self
    where
        F: Fn(&ChipLabel) -> f32,
    {
        if width_of(self) <= available {
            return self.clone();
        }

        let fits = |count: usize| width_of(&self.prefix_with_ellipsis(count)) <= available;
        if !fits(0) {
            return Self::default();
        }

        // Invariant: `low` chars fit, `high` chars do not.
        let mut low = 0;
        let mut high = self.char_count();
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if fits(mid) {
                low = mid;
            } else {
                high = mid;
            }
        }
        self.prefix_with_ellipsis(low)
    }
}

/// Fonts and colors applied to a label when it is measured or drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub title_font: FontId,
    pub location_font: FontId,
    pub color: Color32,
    pub strike_through: bool,
}

impl LabelStyle {
    pub fn for_event<T>(event: &Event<T>, style: &ChipStyle) -> Self {
        Self {
            title_font: style.title_font.clone(),
            location_font: style.location_font.clone(),
            color: event.text_color_or_default(style),
            strike_through: event.style.text_strike_through,
        }
    }

    pub fn font_for(&self, kind: SpanKind) -> &FontId {
        match kind {
            SpanKind::Title => &self.title_font,
            SpanKind::Location => &self.location_font,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn monospace(label: &ChipLabel) -> f32 {
        label.char_count() as f32 * 10.0
    }

    #[test]
    fn test_title_and_location() {
        let label = ChipLabel::new(Some("Meeting"), Some("Room 4"));
        assert_eq!(label.text(), "Meeting Room 4");
        assert_eq!(label.spans()[0].kind, SpanKind::Title);
        assert_eq!(label.spans()[1].kind, SpanKind::Location);
        assert_eq!(label.spans()[1].text, " Room 4");
    }

    #[test]
    fn test_location_only_keeps_leading_space() {
        let label = ChipLabel::new(None, Some("Room 4"));
        assert_eq!(label.text(), " Room 4");
        assert_eq!(label.spans()[0].kind, SpanKind::Location);
    }

    #[test]
    fn test_location_only_truncation_counts_the_space() {
        let label = ChipLabel::new(None, Some("Gym class"));
        assert_eq!(label.ellipsize_with(40.0, monospace).text(), " Gy…");
    }

    #[test]
    fn test_empty_label() {
        assert!(ChipLabel::new(None, None).is_empty());
        assert!(ChipLabel::new(Some(""), None).is_empty());
    }

    #[test]
    fn test_ellipsize_keeps_fitting_text() {
        let label = ChipLabel::new(Some("Standup"), None);
        assert_eq!(label.ellipsize_with(70.0, monospace), label);
    }

    #[test_case(60.0, "Stand…" ; "six columns")]
    #[test_case(20.0, "S…" ; "two columns")]
    #[test_case(10.0, "…" ; "ellipsis only")]
    fn test_ellipsize_truncates(available: f32, expected: &str) {
        let label = ChipLabel::new(Some("Standup"), None);
        assert_eq!(label.ellipsize_with(available, monospace).text(), expected);
    }

    #[test]
    fn test_ellipsize_nothing_fits() {
        let label = ChipLabel::new(Some("Standup"), None);
        assert!(label.ellipsize_with(5.0, monospace).is_empty());
    }

    #[test]
    fn test_ellipsize_across_spans_keeps_kinds() {
        let label = ChipLabel::new(Some("Sync"), Some("Room 4"));
        let truncated = label.ellipsize_with(70.0, monospace);

        assert_eq!(truncated.text(), "Sync R…");
        assert_eq!(truncated.spans()[0].text, "Sync");
        assert_eq!(truncated.spans()[0].kind, SpanKind::Title);
        assert_eq!(truncated.spans()[1].text, " R…");
        assert_eq!(truncated.spans()[1].kind, SpanKind::Location);
    }
}
