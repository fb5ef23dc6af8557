//! Chip store for the visible week.
//!
//! Chips are bucketed by the date their segment starts on, with all-day
//! chips kept apart from timed ones. The store is rebuilt whenever the
//! loaded events change; bounds are filled in later by the layout pass.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use egui::Pos2;

use crate::models::event::Event;
use crate::services::event::EventSplitter;
use crate::ui_egui::chip::EventChip;

/// One chip per segment of `event`, sharing the event as their original.
/// Bounds start unassigned.
pub fn build_chips<T: Clone>(event: Event<T>, splitter: &EventSplitter) -> Vec<EventChip<T>> {
    let segments = splitter.split(&event);
    let original = Arc::new(event);
    segments
        .into_iter()
        .map(|segment| EventChip::new(segment, Arc::clone(&original), None))
        .collect()
}

#[derive(Debug)]
pub struct EventChipsCache<T> {
    timed: BTreeMap<NaiveDate, Vec<EventChip<T>>>,
    all_day: BTreeMap<NaiveDate, Vec<EventChip<T>>>,
}

impl<T> Default for EventChipsCache<T> {
    fn default() -> Self {
        Self {
            timed: BTreeMap::new(),
            all_day: BTreeMap::new(),
        }
    }
}

impl<T> EventChipsCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timed chips first, then all-day chips, each in date order.
    pub fn all_chips(&self) -> impl Iterator<Item = &EventChip<T>> {
        self.timed.values().chain(self.all_day.values()).flatten()
    }

    pub fn all_chips_mut(&mut self) -> impl Iterator<Item = &mut EventChip<T>> {
        self.timed
            .values_mut()
            .chain(self.all_day.values_mut())
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.all_chips().count()
    }

    pub fn is_empty(&self) -> bool {
        self.timed.is_empty() && self.all_day.is_empty()
    }

    /// Insert chips. A chip replaces the one with the same event id in its
    /// date bucket, keeping that chip's position.
    pub fn add_all(&mut self, chips: impl IntoIterator<Item = EventChip<T>>) {
        for chip in chips {
            let date = chip.event.start.date();
            let bucket = if chip.event.all_day {
                self.all_day.entry(date).or_default()
            } else {
                self.timed.entry(date).or_default()
            };

            match bucket
                .iter()
                .position(|existing| existing.event.id == chip.event.id)
            {
                Some(index) => bucket[index] = chip,
                None => bucket.push(chip),
            }
        }
    }

    pub fn replace_all(&mut self, chips: impl IntoIterator<Item = EventChip<T>>) {
        self.clear();
        self.add_all(chips);
    }

    pub fn timed_chips_on(&self, date: NaiveDate) -> &[EventChip<T>] {
        self.timed.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_day_chips_on(&self, date: NaiveDate) -> &[EventChip<T>] {
        self.all_day.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Chips for the given dates in render order: per date, all-day chips
    /// before timed chips.
    pub fn chips_in_date_range<'a>(
        &'a self,
        dates: &'a [NaiveDate],
    ) -> impl Iterator<Item = &'a EventChip<T>> + 'a {
        dates.iter().flat_map(move |date| {
            self.all_day_chips_on(*date)
                .iter()
                .chain(self.timed_chips_on(*date))
        })
    }

    /// The chip under `pos`, if any.
    ///
    /// Exactly two hits almost always mean an all-day chip drawn over a
    /// timed one; the all-day chip wins.
    pub fn find_hit(&self, pos: Pos2) -> Option<&EventChip<T>> {
        let candidates: Vec<&EventChip<T>> = self.all_chips().filter(|chip| chip.is_hit(pos)).collect();
        match candidates.as_slice() {
            [] => None,
            [first, second] => Some(if second.event.all_day && !first.event.all_day {
                *second
            } else {
                *first
            }),
            [first, ..] => Some(*first),
        }
    }

    pub fn remove_all(&mut self, event_ids: &[i64]) {
        for bucket in self.timed.values_mut().chain(self.all_day.values_mut()) {
            bucket.retain(|chip| !event_ids.contains(&chip.event.id));
        }
        self.timed.retain(|_, bucket| !bucket.is_empty());
        self.all_day.retain(|_, bucket| !bucket.is_empty());
    }

    /// Drop the bounds of timed chips so the next layout pass recomputes
    /// them. All-day chips keep theirs.
    pub fn clear_timed_bounds(&mut self) {
        self.timed
            .values_mut()
            .flatten()
            .filter(|chip| chip.original_event.is_not_all_day())
            .for_each(EventChip::clear_bounds);
    }

    pub fn clear(&mut self) {
        self.timed.clear();
        self.all_day.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use egui::{pos2, Rect};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn chip(id: i64, day: u32, all_day: bool, bounds: Option<Rect>) -> EventChip<()> {
        let mut event = Event::new(id, format!("Event {}", id), at(day, 9), at(day, 10), ()).unwrap();
        event.all_day = all_day;
        let original = Arc::new(event.clone());
        EventChip::new(event, original, bounds)
    }

    fn rect(l: f32, t: f32, r: f32, b: f32) -> Rect {
        Rect::from_min_max(pos2(l, t), pos2(r, b))
    }

    #[test]
    fn test_build_chips_shares_original() {
        let event = Event::new(5, "Trip", at(10, 9), at(12, 17), ()).unwrap();
        let chips = build_chips(event, &EventSplitter::default());

        assert_eq!(chips.len(), 3);
        assert!(chips.iter().all(|c| c.bounds().is_none()));
        assert!(Arc::ptr_eq(&chips[0].original_event, &chips[2].original_event));
    }

    #[test]
    fn test_add_all_replaces_same_id_in_bucket() {
        let mut cache = EventChipsCache::new();
        cache.add_all([chip(1, 10, false, None), chip(2, 10, false, None)]);

        let mut updated = chip(1, 10, false, None);
        updated.event.title = Some("Renamed".to_string());
        cache.add_all([updated]);

        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let titles: Vec<_> = cache
            .timed_chips_on(day)
            .iter()
            .map(|c| c.event.title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["Renamed", "Event 2"]);
    }

    #[test]
    fn test_date_range_puts_all_day_first() {
        let mut cache = EventChipsCache::new();
        cache.add_all([
            chip(1, 10, false, None),
            chip(2, 10, true, None),
            chip(3, 11, false, None),
            chip(4, 12, false, None),
        ]);

        let dates = [
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
        ];
        let ids: Vec<_> = cache.chips_in_date_range(&dates).map(|c| c.event.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_find_hit_prefers_all_day_of_two() {
        let mut cache = EventChipsCache::new();
        cache.add_all([
            chip(1, 10, false, Some(rect(0.0, 0.0, 100.0, 100.0))),
            chip(2, 10, true, Some(rect(0.0, 0.0, 100.0, 20.0))),
        ]);

        assert_eq!(cache.find_hit(pos2(50.0, 10.0)).map(|c| c.event.id), Some(2));
        assert_eq!(cache.find_hit(pos2(50.0, 50.0)).map(|c| c.event.id), Some(1));
        assert!(cache.find_hit(pos2(500.0, 50.0)).is_none());
    }

    #[test]
    fn test_remove_all() {
        let mut cache = EventChipsCache::new();
        cache.add_all([chip(1, 10, false, None), chip(2, 11, true, None)]);
        cache.remove_all(&[1, 2]);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_timed_bounds_keeps_all_day() {
        let mut cache = EventChipsCache::new();
        let bounds = Some(rect(0.0, 0.0, 10.0, 10.0));
        cache.add_all([chip(1, 10, false, bounds), chip(2, 10, true, bounds)]);

        cache.clear_timed_bounds();

        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(cache.timed_chips_on(day)[0].bounds().is_none());
        assert_eq!(cache.all_day_chips_on(day)[0].bounds(), bounds);
        assert_eq!(cache.len(), 2);
    }
}
