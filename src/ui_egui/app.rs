//! Demo week view: three day columns of chips, with click hit-testing.
//!
//! Placement is a naive stand-in for the real grid layout: each day column
//! maps hours to height, and chips starting on the same day share the
//! column width equally.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use egui::{pos2, Galley, Rect};

use crate::models::event::Event;
use crate::services::chips::{build_chips, EventChipsCache};
use crate::services::event::EventSplitter;
use crate::ui_egui::chip::{ChipTextCache, EguiTextMeasurer};
use crate::ui_egui::theme::ChipStyle;

const DAYS_SHOWN: i64 = 3;
const SECONDS_PER_DAY: f32 = 24.0 * 60.0 * 60.0;

pub struct ChipDemoApp {
    chips: EventChipsCache<()>,
    dates: Vec<NaiveDate>,
    style: ChipStyle,
    base_style: ChipStyle,
    dark: bool,
    text_cache: ChipTextCache<Arc<Galley>>,
    status: String,
}

impl ChipDemoApp {
    pub fn new(style: ChipStyle) -> Self {
        let first_day = Local::now().date_naive();
        let dates: Vec<NaiveDate> = (0..DAYS_SHOWN)
            .map(|offset| first_day + Duration::days(offset))
            .collect();

        let mut app = Self {
            chips: EventChipsCache::new(),
            dates,
            base_style: style.clone(),
            style,
            dark: false,
            text_cache: ChipTextCache::new(),
            status: "Click a chip".to_string(),
        };
        app.reload();
        app
    }

    /// Rebuild every chip from the sample events of the shown days.
    fn reload(&mut self) {
        let Some(first_day) = self.dates.first().copied() else {
            return;
        };
        let splitter = EventSplitter::default();
        self.chips.replace_all(
            sample_events(first_day)
                .into_iter()
                .flat_map(|event| build_chips(event, &splitter)),
        );
        self.text_cache.clear();
        log::info!("Demo week holds {} chips", self.chips.len());
    }

    /// Assign bounds to every chip for the given grid rectangle.
    fn layout(&mut self, grid: Rect) {
        let column_width = grid.width() / self.dates.len().max(1) as f32;
        for (column, date) in self.dates.iter().enumerate() {
            let column_left = grid.left() + column as f32 * column_width;
            let timed: Vec<i64> = self
                .chips
                .timed_chips_on(*date)
                .iter()
                .map(|chip| chip.event.id)
                .collect();
            let lanes = timed.len().max(1) as f32;
            let lane_width = column_width / lanes;

            for chip in self.chips.all_chips_mut() {
                if chip.event.all_day || chip.event.start.date() != *date {
                    continue;
                }
                let Some(lane) = timed.iter().position(|id| *id == chip.event.id) else {
                    continue;
                };
                let left = column_left + lane as f32 * lane_width + 1.0;
                let top = grid.top() + fraction_of_day(chip.event.start) * grid.height();
                let bottom = grid.top() + fraction_of_day(chip.event.end) * grid.height();
                chip.set_bounds(Rect::from_min_max(
                    pos2(left, top),
                    pos2(left + lane_width - 2.0, bottom),
                ));
            }
        }
    }

    fn set_dark(&mut self, dark: bool) {
        self.style = if dark {
            ChipStyle {
                default_color: ChipStyle::dark().default_color,
                text_color: ChipStyle::dark().text_color,
                ..self.base_style.clone()
            }
        } else {
            self.base_style.clone()
        };
        self.text_cache.clear();
    }
}

impl eframe::App for ChipDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("chip_demo_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.checkbox(&mut self.dark, "Dark chips").changed() {
                    let dark = self.dark;
                    self.set_dark(dark);
                }
                if ui.button("Reload").clicked() {
                    self.reload();
                    self.status = "Reloaded sample events".to_string();
                }
                ui.separator();
                ui.label(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, mut painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let grid = response.rect;
            painter.rect_filled(grid, 0.0, ui.visuals().extreme_bg_color);

            self.layout(grid);

            let measurer = EguiTextMeasurer::new(ctx);
            for chip in self.chips.chips_in_date_range(&self.dates) {
                chip.render_cached(&self.style, &mut painter, &measurer, &mut self.text_cache);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.status = match self.chips.find_hit(pos) {
                        Some(chip) => {
                            log::info!("Hit event {} at {:?}", chip.event.id, pos);
                            format!(
                                "Event {}: {}",
                                chip.event.id,
                                chip.event.title.as_deref().unwrap_or("(untitled)")
                            )
                        }
                        None => "No event here".to_string(),
                    };
                }
            }
        });
    }
}

fn fraction_of_day(time: NaiveDateTime) -> f32 {
    time.num_seconds_from_midnight() as f32 / SECONDS_PER_DAY
}

fn sample_events(first_day: NaiveDate) -> Vec<Event<()>> {
    let at = |day: i64, hour: u32, minute: u32| -> Option<NaiveDateTime> {
        (first_day + Duration::days(day)).and_hms_opt(hour, minute, 0)
    };

    let specs = [
        (1, Some("Offsite"), Some("Lakeside lodge"), (0, 15, 0), (2, 11, 0), Some("#2E7D32"), 2.0),
        (2, Some("Standup"), None, (0, 9, 0), (0, 9, 30), None, 0.0),
        (3, Some("Quarterly planning with the whole product group"), Some("Board room"), (1, 13, 0), (1, 14, 0), Some("#C62828"), 0.0),
        (4, None, Some("Gym"), (2, 18, 0), (2, 19, 30), Some("#6A1B9A"), 1.0),
    ];

    specs
        .into_iter()
        .filter_map(|(id, title, location, start, end, color, border)| {
            let mut builder = Event::builder(())
                .id(id)
                .start(at(start.0, start.1, start.2)?)
                .end(at(end.0, end.1, end.2)?)
                .border_width(border)
                .border_color("#000000");
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(location) = location {
                builder = builder.location(location);
            }
            if let Some(color) = color {
                builder = builder.color(color);
            }
            builder
                .build()
                .map_err(|e| log::warn!("Skipping sample event {}: {}", id, e))
                .ok()
        })
        .collect()
}
