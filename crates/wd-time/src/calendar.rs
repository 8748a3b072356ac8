//! `Calendar` trait — classifies calendar dates as working or non-working.
//!
//! A calendar knows which dates are weekends and which are holidays, and can
//! step to the next working day in either direction.

use chrono::{Datelike, Days, Weekday};

use crate::CalendarDate;

/// Direction of travel through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Move `date` one calendar day in this direction.
    ///
    /// # Panics
    /// If the result would fall outside `chrono`'s supported date range
    /// (roughly ±262 000 years).
    pub fn step(self, date: CalendarDate) -> CalendarDate {
        let one = Days::new(1);
        match self {
            Direction::Forward => date.checked_add_days(one),
            Direction::Backward => date.checked_sub_days(one),
        }
        .expect("date stepped outside the supported calendar range")
    }
}

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug {
    /// Return `true` if `date` is a holiday (weekends are not holidays).
    fn is_holiday(&self, date: CalendarDate) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: CalendarDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_working_day(&self, date: CalendarDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return the first working day strictly after (or, going backward,
    /// strictly before) `date`.
    ///
    /// Never returns `date` itself.
    ///
    /// # Panics
    /// If the walk leaves `chrono`'s supported date range; see
    /// [`Direction::step`].
    fn next_working_day(&self, date: CalendarDate, direction: Direction) -> CalendarDate {
        let mut d = direction.step(date);
        while !self.is_working_day(d) {
            d = direction.step(d);
        }
        d
    }
}
