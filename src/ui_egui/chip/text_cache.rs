//! Per-chip cache of fitted titles.
//!
//! Fitting runs several layout passes, so the week view keeps the result
//! per chip and only re-fits when the chip's interior changes size. Style
//! changes are not tracked; call [`ChipTextCache::clear`] after switching
//! themes or fonts.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use egui::{vec2, Vec2};

use super::drawer;
use super::fitter::{FittedText, TextMeasurer};
use super::geometry::interior_rect;
use super::EventChip;
use crate::ui_egui::theme::ChipStyle;

/// Segments of one event share an id, so the segment start is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChipKey {
    event_id: i64,
    segment_start: NaiveDateTime,
}

impl ChipKey {
    fn of<T>(chip: &EventChip<T>) -> Self {
        Self {
            event_id: chip.event.id,
            segment_start: chip.event.start,
        }
    }
}

#[derive(Debug)]
struct CachedText<B> {
    area: Vec2,
    text: Option<FittedText<B>>,
}

#[derive(Debug)]
pub struct ChipTextCache<B> {
    entries: HashMap<ChipKey, CachedText<B>>,
}

impl<B> Default for ChipTextCache<B> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<B> ChipTextCache<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted title for `chip`, re-fitting when no entry exists or the
    /// interior size changed. A chip without bounds yields `None` and leaves
    /// the cache untouched.
    pub fn fitted_text<T, M>(
        &mut self,
        chip: &EventChip<T>,
        style: &ChipStyle,
        measurer: &M,
    ) -> Option<&FittedText<B>>
    where
        M: TextMeasurer<Block = B>,
    {
        let bounds = chip.bounds()?;
        let area = interior_rect(bounds, style.padding)
            .map(|interior| vec2(interior.width().floor(), interior.height().floor()))
            .unwrap_or(Vec2::ZERO);
        let key = ChipKey::of(chip);

        let stale = self.entries.get(&key).map_or(true, |entry| entry.area != area);
        if stale {
            log::trace!("Fitting title for event {} at {:?}", key.event_id, area);
            let text = drawer::fit_title(chip, bounds, style, measurer);
            self.entries.insert(key, CachedText { area, text });
        }

        self.entries.get(&key).and_then(|entry| entry.text.as_ref())
    }

    /// Drop every entry of an event, e.g. after its title changed.
    pub fn invalidate(&mut self, event_id: i64) {
        self.entries.retain(|key, _| key.event_id != event_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
