use crate::models::event::Event;
use crate::utils::date::{end_of_period, is_at_start_of_next_day, start_of_period};

/// Splits events into per-day segments for a grid showing
/// `min_hour..max_hour` of each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSplitter {
    pub min_hour: u32,
    pub max_hour: u32,
}

impl Default for EventSplitter {
    fn default() -> Self {
        Self {
            min_hour: 0,
            max_hour: 24,
        }
    }
}

impl EventSplitter {
    pub fn new(min_hour: u32, max_hour: u32) -> Self {
        Self { min_hour, max_hour }
    }

    /// Segments of `event`, ordered by start then end.
    ///
    /// Each segment keeps the event's id, text, style and payload; only the
    /// start and end change. Empty or inverted events yield no segments.
    pub fn split<T: Clone>(&self, event: &Event<T>) -> Vec<Event<T>> {
        if event.start >= event.end {
            return Vec::new();
        }

        // An event ending exactly at midnight belongs to its start day only.
        let ends_at_next_midnight = is_at_start_of_next_day(event.end, event.start);
        if self.min_hour == 0 && ends_at_next_midnight {
            let mut segment = event.clone();
            segment.end = end_of_period(event.start.date(), self.max_hour);
            return vec![segment];
        }

        if event.is_multi_day() {
            self.split_by_dates(event)
        } else {
            vec![event.clone()]
        }
    }

    fn split_by_dates<T: Clone>(&self, event: &Event<T>) -> Vec<Event<T>> {
        let first_date = event.start.date();
        let last_date = event.end.date();
        let mut segments = Vec::new();

        let mut first = event.clone();
        first.end = end_of_period(first_date, self.max_hour);
        segments.push(first);

        let mut date = first_date.succ_opt();
        while let Some(day) = date.filter(|day| *day < last_date) {
            let mut middle = event.clone();
            middle.start = start_of_period(day, self.min_hour);
            middle.end = end_of_period(day, self.max_hour);
            segments.push(middle);
            date = day.succ_opt();
        }

        let mut last = event.clone();
        last.start = start_of_period(last_date, self.min_hour);
        segments.push(last);

        // Segments outside the visible hours collapse to nothing.
        segments.retain(|segment| segment.start < segment.end);
        segments.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

        log::trace!("Split event {} into {} segments", event.id, segments.len());
        segments
    }
}
