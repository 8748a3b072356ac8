//! Holiday registry — single-date and yearly-recurring holidays.
//!
//! Holidays only accumulate: there is no removal operation, and inserting a
//! holiday that is already present is a no-op.

use std::collections::HashSet;

use chrono::Datelike;
use wd_core::{ensure, Result};

use crate::CalendarDate;

/// Maximum day-of-month for each month, using a leap year so that
/// February 29 is always accepted as a recurring holiday.
const MAX_DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The set of holidays known to a calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    single: HashSet<CalendarDate>,
    recurring: HashSet<(u32, u32)>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday on an exact calendar date.
    pub fn add_single(&mut self, date: CalendarDate) {
        if self.single.insert(date) {
            log::debug!("added single holiday {date}");
        }
    }

    /// Add a holiday that recurs every year on `month`/`day`.
    ///
    /// # Errors
    /// [`OutOfRange`](wd_core::Error::OutOfRange) if `month` is not in
    /// `[1, 12]` or `day` is not a valid day of that month in a leap year.
    pub fn add_recurring(&mut self, month: u32, day: u32) -> Result<()> {
        ensure!(
            (1..=12).contains(&month),
            OutOfRange,
            "month {month} out of range [1, 12]"
        );
        let max_day = MAX_DAYS_IN_MONTH[month as usize - 1];
        ensure!(
            (1..=max_day).contains(&day),
            OutOfRange,
            "day {day} out of range [1, {max_day}] for month {month}"
        );
        if self.recurring.insert((month, day)) {
            log::debug!("added recurring holiday {month:02}-{day:02}");
        }
        Ok(())
    }

    /// Return `true` if `date` is a single holiday or falls on a recurring one.
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.single.contains(&date) || self.recurring.contains(&(date.month(), date.day()))
    }

    /// Number of distinct single-date holidays.
    pub fn single_count(&self) -> usize {
        self.single.len()
    }

    /// Number of distinct recurring holidays.
    pub fn recurring_count(&self) -> usize {
        self.recurring.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::Error;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_set_has_no_holidays() {
        let set = HolidaySet::new();
        assert!(!set.is_holiday(date(2004, 5, 17)));
        assert_eq!(set.single_count(), 0);
        assert_eq!(set.recurring_count(), 0);
    }

    #[test]
    fn single_holiday_matches_only_its_year() {
        let mut set = HolidaySet::new();
        set.add_single(date(2004, 5, 27));
        assert!(set.is_holiday(date(2004, 5, 27)));
        assert!(!set.is_holiday(date(2005, 5, 27)));
        assert!(!set.is_holiday(date(2004, 5, 28)));
    }

    #[test]
    fn recurring_holiday_matches_every_year() {
        let mut set = HolidaySet::new();
        set.add_recurring(5, 17).unwrap();
        assert!(set.is_holiday(date(2004, 5, 17)));
        assert!(set.is_holiday(date(1999, 5, 17)));
        assert!(set.is_holiday(date(2031, 5, 17)));
        assert!(!set.is_holiday(date(2004, 5, 18)));
    }

    #[test]
    fn duplicates_are_idempotent() {
        let mut set = HolidaySet::new();
        set.add_single(date(2004, 5, 27));
        set.add_single(date(2004, 5, 27));
        set.add_recurring(12, 25).unwrap();
        set.add_recurring(12, 25).unwrap();
        assert_eq!(set.single_count(), 1);
        assert_eq!(set.recurring_count(), 1);
    }

    #[test]
    fn february_29_is_accepted() {
        let mut set = HolidaySet::new();
        set.add_recurring(2, 29).unwrap();
        assert!(set.is_holiday(date(2024, 2, 29)));
        // Non-leap years simply have no matching date.
        assert!(!set.is_holiday(date(2023, 2, 28)));
        assert!(!set.is_holiday(date(2023, 3, 1)));
    }

    #[test]
    fn invalid_recurring_holidays_are_rejected() {
        let mut set = HolidaySet::new();
        for (m, d) in [(0, 1), (13, 1), (1, 0), (1, 32), (2, 30), (4, 31)] {
            let err = set.add_recurring(m, d).unwrap_err();
            assert!(matches!(err, Error::OutOfRange(_)), "{m}-{d}: {err}");
        }
        assert_eq!(set.recurring_count(), 0);
    }
}
