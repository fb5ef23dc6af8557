// Event module
// Calendar event model as seen by the chip layer

use chrono::{Duration, NaiveDateTime};
use egui::Color32;
use thiserror::Error;

use crate::ui_egui::theme::ChipStyle;
use crate::utils::color::parse_color;
use crate::utils::date::is_same_day;

/// Validation failures raised while building an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event id is required")]
    MissingId,
    #[error("Event start time is required")]
    MissingStart,
    #[error("Event end time is required")]
    MissingEnd,
    #[error("Event end time must be after start time")]
    EndBeforeStart,
    #[error("Border width must be zero or positive, got {0}")]
    NegativeBorderWidth(String),
    #[error("Color must be in hex format (#RRGGBB), got '{0}'")]
    InvalidColor(String),
}

/// Per-event visual overrides.
///
/// A `border_width` of zero means the event has no border.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStyle {
    pub background_color: Option<Color32>,
    pub border_width: f32,
    pub border_color: Color32,
    pub text_color: Option<Color32>,
    pub text_strike_through: bool,
}

impl Default for EventStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            border_width: 0.0,
            border_color: Color32::TRANSPARENT,
            text_color: None,
            text_strike_through: false,
        }
    }
}

/// A calendar event, or one day-slice of a multi-day event.
///
/// The same type is used for the original, un-split event and for the
/// segments produced by [`crate::services::event::splitter::EventSplitter`].
/// `data` is an opaque payload owned by the caller; nothing in this crate
/// inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    pub id: i64,
    pub title: Option<String>,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub style: EventStyle,
    pub data: T,
}

impl<T> Event<T> {
    /// Create a new timed event with required fields
    ///
    /// # Examples
    /// ```
    /// use event_chips::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new(1, "Team Meeting", start, end, ()).unwrap();
    /// assert_eq!(event.title.as_deref(), Some("Team Meeting"));
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        data: T,
    ) -> Result<Self, EventError> {
        if end <= start {
            return Err(EventError::EndBeforeStart);
        }

        Ok(Self {
            id,
            title: Some(title.into()),
            location: None,
            start,
            end,
            all_day: false,
            style: EventStyle::default(),
            data,
        })
    }

    /// Create a builder carrying the given payload
    pub fn builder(data: T) -> EventBuilder<T> {
        EventBuilder::new(data)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn has_border(&self) -> bool {
        self.style.border_width > 0.0
    }

    pub fn is_not_all_day(&self) -> bool {
        !self.all_day
    }

    /// Start and end fall on different calendar dates.
    pub fn is_multi_day(&self) -> bool {
        !is_same_day(self.start, self.end)
    }

    /// The event's own fill color, or the style default when it has none.
    pub fn color_or_default(&self, style: &ChipStyle) -> Color32 {
        self.style.background_color.unwrap_or(style.default_color)
    }

    pub fn text_color_or_default(&self, style: &ChipStyle) -> Color32 {
        self.style.text_color.unwrap_or(style.text_color)
    }

    /// True when this segment is not the true start of `original`.
    pub fn starts_on_earlier_day(&self, original: &Event<T>) -> bool {
        self.start != original.start
    }

    /// True when this segment is not the true end of `original`.
    pub fn ends_on_later_day(&self, original: &Event<T>) -> bool {
        self.end != original.end
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder<T> {
    id: Option<i64>,
    title: Option<String>,
    location: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    style: EventStyle,
    color: Option<String>,
    border_color: Option<String>,
    data: T,
}

impl<T> EventBuilder<T> {
    pub fn new(data: T) -> Self {
        Self {
            id: None,
            title: None,
            location: None,
            start: None,
            end: None,
            all_day: false,
            style: EventStyle::default(),
            color: None,
            border_color: None,
            data,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the fill color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: Color32) -> Self {
        self.style.background_color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color32) -> Self {
        self.style.text_color = Some(color);
        self
    }

    pub fn text_strike_through(mut self, strike_through: bool) -> Self {
        self.style.text_strike_through = strike_through;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.style.border_width = width;
        self
    }

    /// Set the border color (hex format)
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Event<T>, EventError> {
        let id = self.id.ok_or(EventError::MissingId)?;
        let start = self.start.ok_or(EventError::MissingStart)?;
        let end = self.end.ok_or(EventError::MissingEnd)?;

        if end <= start {
            return Err(EventError::EndBeforeStart);
        }

        let mut style = self.style;
        if style.border_width < 0.0 || style.border_width.is_nan() {
            return Err(EventError::NegativeBorderWidth(style.border_width.to_string()));
        }
        if let Some(hex) = self.color {
            let color = parse_color(&hex).ok_or(EventError::InvalidColor(hex))?;
            style.background_color = Some(color);
        }
        if let Some(hex) = self.border_color {
            style.border_color = parse_color(&hex).ok_or(EventError::InvalidColor(hex))?;
        }

        Ok(Event {
            id,
            title: self.title,
            location: self.location,
            start,
            end,
            all_day: self.all_day,
            style,
            data: self.data,
        })
    }
}
