// Test fixtures - reusable test data
// Provides consistent events and chips across all test files

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use egui::{pos2, Rect};
use event_chips::models::event::Event;
use event_chips::services::chips::build_chips;
use event_chips::services::event::EventSplitter;
use event_chips::ui_egui::chip::EventChip;
use event_chips::ui_egui::theme::ChipStyle;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 10, 2025 at the given time
    pub fn mar_10_2025(hour: u32, minute: u32) -> NaiveDateTime {
        on_day(10, hour, minute)
    }

    pub fn on_day(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

pub fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
    Rect::from_min_max(pos2(left, top), pos2(right, bottom))
}

/// The style used by the rendering scenarios: radius 6, padding 4
pub fn scenario_style() -> ChipStyle {
    ChipStyle {
        corner_radius: 6.0,
        padding: 4.0,
        ..ChipStyle::light()
    }
}

/// A one-hour meeting with the given title and location
pub fn meeting(title: Option<&str>, location: Option<&str>) -> Event<()> {
    let mut event = Event::builder(())
        .id(1)
        .start(dates::mar_10_2025(9, 0))
        .end(dates::mar_10_2025(10, 0))
        .build()
        .unwrap();
    event.title = title.map(str::to_string);
    event.location = location.map(str::to_string);
    event
}

/// A chip whose segment is the whole event
pub fn whole_event_chip(event: Event<()>, bounds: Rect) -> EventChip<()> {
    let original = Arc::new(event.clone());
    EventChip::new(event, original, Some(bounds))
}

/// Mar 10 09:00 to Mar 12 17:00, split into start, middle and end chips
pub fn three_day_chips(border_width: f32) -> Vec<EventChip<()>> {
    let event = Event::builder(())
        .id(9)
        .title("Offsite")
        .start(dates::on_day(10, 9, 0))
        .end(dates::on_day(12, 17, 0))
        .color("#2E7D32")
        .border_width(border_width)
        .border_color("#000000")
        .build()
        .unwrap();

    let mut chips = build_chips(event, &EventSplitter::default());
    for (index, chip) in chips.iter_mut().enumerate() {
        let left = index as f32 * 100.0;
        chip.set_bounds(rect(left, 0.0, left + 100.0, 200.0));
    }
    chips
}
