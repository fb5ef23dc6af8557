// Property-based tests for chip geometry, hit-testing and title fitting

use std::sync::Arc;

use chrono::Duration;
use egui::{pos2, Color32};
use event_chips::models::event::Event;
use event_chips::services::event::EventSplitter;
use event_chips::ui_egui::chip::geometry::interior_rect;
use event_chips::ui_egui::chip::recording::MonospaceMeasurer;
use event_chips::ui_egui::chip::{ChipLabel, EventChip, LabelStyle, TitleFitter};
use event_chips::ui_egui::theme::ChipStyle;
use proptest::prelude::*;

mod fixtures;

use fixtures::{dates, rect};

fn label_style() -> LabelStyle {
    let style = ChipStyle::light();
    LabelStyle {
        title_font: style.title_font,
        location_font: style.location_font,
        color: Color32::WHITE,
        strike_through: false,
    }
}

fn chip_at(left: f32, top: f32, width: f32, height: f32) -> EventChip<()> {
    let event = Event::builder(())
        .id(1)
        .title("Meeting")
        .start(dates::mar_10_2025(9, 0))
        .end(dates::mar_10_2025(10, 0))
        .build()
        .unwrap();
    let original = Arc::new(event.clone());
    EventChip::new(
        event,
        original,
        Some(rect(left, top, left + width, top + height)),
    )
}

proptest! {
    /// Zero padding leaves the bounds untouched
    #[test]
    fn prop_zero_padding_interior_is_identity(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in 0.0f32..400.0,
        height in 0.0f32..400.0,
    ) {
        let bounds = rect(left, top, left + width, top + height);
        prop_assert_eq!(interior_rect(bounds, 0.0), Some(bounds));
    }

    /// Points on any edge of the bounds never hit
    #[test]
    fn prop_edges_never_hit(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in 1.0f32..400.0,
        height in 1.0f32..400.0,
        t in 0.0f32..=1.0,
    ) {
        let chip = chip_at(left, top, width, height);
        let bounds = chip.bounds().unwrap();
        let x = bounds.left() + t * bounds.width();
        let y = bounds.top() + t * bounds.height();

        prop_assert!(!chip.is_hit(pos2(bounds.left(), y)));
        prop_assert!(!chip.is_hit(pos2(bounds.right(), y)));
        prop_assert!(!chip.is_hit(pos2(x, bounds.top())));
        prop_assert!(!chip.is_hit(pos2(x, bounds.bottom())));
    }

    /// The center of a chip with positive area always hits
    #[test]
    fn prop_center_hits(
        left in -500.0f32..500.0,
        top in -500.0f32..500.0,
        width in 1.0f32..400.0,
        height in 1.0f32..400.0,
    ) {
        let chip = chip_at(left, top, width, height);
        prop_assert!(chip.is_hit(chip.bounds().unwrap().center()));
    }

    /// A chip without bounds never hits
    #[test]
    fn prop_unplaced_chip_never_hits(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
        let mut chip = chip_at(0.0, 0.0, 100.0, 50.0);
        chip.clear_bounds();
        prop_assert!(!chip.is_hit(pos2(x, y)));
    }

    /// Fitted text never exceeds the interior, and never uses more lines
    /// than the interior holds
    #[test]
    fn prop_fitted_text_stays_inside_interior(
        title in "[A-Za-z ]{1,60}",
        location in proptest::option::of("[A-Za-z0-9 ,]{1,30}"),
        width in 1.0f32..300.0,
        height in 1.0f32..200.0,
        char_width in 4u8..12,
        line_height in 8u8..20,
    ) {
        let (char_width, line_height) = (f32::from(char_width), f32::from(line_height));
        let measurer = MonospaceMeasurer::new(char_width, line_height);
        let label = ChipLabel::new(Some(&title), location.as_deref());
        let interior = rect(0.0, 0.0, width, height);
        let max_lines = (height.floor() / line_height).floor() as usize;

        match TitleFitter::new(&measurer).fit(&label, &label_style(), interior) {
            Some(fitted) => {
                prop_assert!(fitted.height() <= height.floor());
                prop_assert!(fitted.line_count() <= max_lines);
                prop_assert!(fitted.line_count() >= 1);
            }
            None => prop_assert!(max_lines == 0 || char_width > width.floor()),
        }
    }

    /// Split segments are non-empty, stay within one day, and tile the event
    #[test]
    fn prop_split_segments_tile_event(
        start_hour in 0u32..24,
        start_minute in 0u32..60,
        minutes in 1i64..(5 * 24 * 60),
    ) {
        let start = dates::mar_10_2025(start_hour, start_minute);
        let end = start + Duration::minutes(minutes);
        let event = Event::builder(())
            .id(3)
            .start(start)
            .end(end)
            .build()
            .unwrap();

        let segments = EventSplitter::default().split(&event);
        prop_assert!(!segments.is_empty());
        prop_assert_eq!(segments[0].start, start);

        for segment in &segments {
            prop_assert!(segment.start < segment.end);
            prop_assert_eq!(segment.start.date(), segment.end.date());
        }
        for pair in segments.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
            prop_assert_eq!(pair[1].start.date(), pair[0].end.date() + Duration::days(1));
        }
    }
}
