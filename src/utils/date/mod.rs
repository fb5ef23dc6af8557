// Date utility functions
// Period boundaries for splitting events across grid days

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// True when both instants fall on the same calendar date.
pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// First instant of the visible period on `date`.
pub fn start_of_period(date: NaiveDate, min_hour: u32) -> NaiveDateTime {
    start_of_day(date) + Duration::hours(i64::from(min_hour.min(24)))
}

/// Last instant of the visible period on `date`.
///
/// The period is closed one millisecond before `max_hour`, so a period
/// ending at 24 stays on `date`.
pub fn end_of_period(date: NaiveDate, max_hour: u32) -> NaiveDateTime {
    start_of_day(date) + Duration::hours(i64::from(max_hour.min(24))) - Duration::milliseconds(1)
}

/// True when `end` is exactly midnight of the day after `start`.
pub fn is_at_start_of_next_day(end: NaiveDateTime, start: NaiveDateTime) -> bool {
    end.time() == NaiveTime::MIN && start.date().succ_opt() == Some(end.date())
}
