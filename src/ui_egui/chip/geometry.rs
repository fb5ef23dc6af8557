//! Rectangles derived from a chip's bounds.
//!
//! All helpers take the chip's bounding rectangle and return a new one; the
//! bounds themselves are never modified.

use egui::{pos2, Rect};

/// Horizontal chip edge that may continue into an adjacent day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Bounds shrunk by half the border width on every side, so a centered
/// stroke lands exactly on the fill boundary.
///
/// Returns `None` when the inset has no positive area.
pub fn border_inset_rect(rect: Rect, border_width: f32) -> Option<Rect> {
    let half = border_width / 2.0;
    let inset = Rect::from_min_max(
        pos2(rect.left() + half, rect.top() + half),
        pos2(rect.right() - half, rect.bottom() - half),
    );
    (inset.width() > 0.0 && inset.height() > 0.0).then_some(inset)
}

/// Bounds shrunk by `padding` on every side; the area available to text.
///
/// Returns `None` when either dimension goes negative. A zero-sized interior
/// is still returned; text fitting rejects it on its own.
pub fn interior_rect(rect: Rect, padding: f32) -> Option<Rect> {
    let interior = Rect::from_min_max(
        pos2(rect.left() + padding, rect.top() + padding),
        pos2(rect.right() - padding, rect.bottom() - padding),
    );
    (interior.width() >= 0.0 && interior.height() >= 0.0).then_some(interior)
}

/// Full-width strip covering the top rounded corners.
pub fn top_strip_rect(rect: Rect, corner_radius: f32) -> Rect {
    Rect::from_min_max(
        rect.left_top(),
        pos2(rect.right(), rect.top() + corner_radius),
    )
}

/// Full-width strip covering the bottom rounded corners.
pub fn bottom_strip_rect(rect: Rect, corner_radius: f32) -> Rect {
    Rect::from_min_max(
        pos2(rect.left(), rect.bottom() - corner_radius),
        rect.right_bottom(),
    )
}

/// Strip covering the border stroke along `edge`, inset horizontally by the
/// border width so the side strokes stay intact.
pub fn border_strip_rect(rect: Rect, edge: Edge, border_width: f32) -> Rect {
    let left = rect.left() + border_width;
    let right = rect.right() - border_width;
    match edge {
        Edge::Top => Rect::from_min_max(
            pos2(left, rect.top()),
            pos2(right, rect.top() + border_width),
        ),
        Edge::Bottom => Rect::from_min_max(
            pos2(left, rect.bottom() - border_width),
            pos2(right, rect.bottom()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: f32, t: f32, r: f32, b: f32) -> Rect {
        Rect::from_min_max(pos2(l, t), pos2(r, b))
    }

    #[test]
    fn test_border_inset_halves_width() {
        let inset = border_inset_rect(rect(0.0, 0.0, 100.0, 50.0), 2.0).unwrap();
        assert_eq!(inset, rect(1.0, 1.0, 99.0, 49.0));
    }

    #[test]
    fn test_border_inset_degenerate() {
        assert_eq!(border_inset_rect(rect(0.0, 0.0, 100.0, 4.0), 4.0), None);
        assert_eq!(border_inset_rect(rect(0.0, 0.0, 3.0, 50.0), 6.0), None);
    }

    #[test]
    fn test_interior_rect_zero_padding_is_identity() {
        let bounds = rect(3.5, 7.25, 120.0, 64.0);
        assert_eq!(interior_rect(bounds, 0.0), Some(bounds));
    }

    #[test]
    fn test_interior_rect_padding() {
        let interior = interior_rect(rect(0.0, 0.0, 100.0, 50.0), 4.0).unwrap();
        assert_eq!(interior, rect(4.0, 4.0, 96.0, 46.0));
    }

    #[test]
    fn test_interior_rect_negative_is_none() {
        assert_eq!(interior_rect(rect(0.0, 0.0, 6.0, 50.0), 4.0), None);
        assert!(interior_rect(rect(0.0, 0.0, 8.0, 8.0), 4.0).is_some());
    }

    #[test]
    fn test_corner_strips() {
        let bounds = rect(10.0, 20.0, 110.0, 80.0);
        assert_eq!(top_strip_rect(bounds, 6.0), rect(10.0, 20.0, 110.0, 26.0));
        assert_eq!(bottom_strip_rect(bounds, 6.0), rect(10.0, 74.0, 110.0, 80.0));
    }

    #[test]
    fn test_border_strips() {
        let bounds = rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            border_strip_rect(bounds, Edge::Top, 2.0),
            rect(2.0, 0.0, 98.0, 2.0)
        );
        assert_eq!(
            border_strip_rect(bounds, Edge::Bottom, 2.0),
            rect(2.0, 48.0, 98.0, 50.0)
        );
    }
}
