//! `WorkdayCalendar` — holidays and working hours in one place.

use wd_core::{Decimal, Result};

use crate::calendar::Calendar;
use crate::config::CalendarConfig;
use crate::holidays::HolidaySet;
use crate::schedule::WorkingSchedule;
use crate::{CalendarDate, Timestamp};

/// A working-day calendar with configurable working hours and holidays.
///
/// Starts out with a 09:00-17:00 schedule and no holidays. Holidays only
/// accumulate; the schedule is replaced as a whole.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use wd_time::WorkdayCalendar;
///
/// let mut cal = WorkdayCalendar::new();
/// cal.configure_working_hours(8, 0, 16, 0).unwrap();
/// cal.add_recurring_holiday(5, 17).unwrap();
/// cal.add_single_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap());
///
/// let start = NaiveDate::from_ymd_opt(2004, 5, 24).unwrap().and_hms_opt(18, 5, 0).unwrap();
/// let end = cal.add_workday_increment(start, -5.5);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2004, 5, 14).unwrap().and_hms_opt(12, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayCalendar {
    holidays: HolidaySet,
    schedule: WorkingSchedule,
}

impl WorkdayCalendar {
    /// Create a calendar with the default schedule and no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calendar from a [`CalendarConfig`].
    ///
    /// # Errors
    /// The first error raised by [`configure_working_hours`](Self::configure_working_hours)
    /// or [`add_recurring_holiday`](Self::add_recurring_holiday).
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let mut cal = Self::new();
        let hours = &config.working_hours;
        cal.configure_working_hours(
            hours.start_hour,
            hours.start_minute,
            hours.stop_hour,
            hours.stop_minute,
        )?;
        for &date in &config.holidays {
            cal.add_single_holiday(date);
        }
        for rh in &config.recurring_holidays {
            cal.add_recurring_holiday(rh.month, rh.day)?;
        }
        Ok(cal)
    }

    /// Replace the working schedule.
    ///
    /// On error the previous schedule stays in effect.
    ///
    /// # Errors
    /// [`OutOfRange`](wd_core::Error::OutOfRange) for an invalid hour or
    /// minute, [`InvalidConfiguration`](wd_core::Error::InvalidConfiguration)
    /// if the start is not strictly before the stop.
    pub fn configure_working_hours(
        &mut self,
        start_hour: u32,
        start_minute: u32,
        stop_hour: u32,
        stop_minute: u32,
    ) -> Result<()> {
        let schedule = WorkingSchedule::from_hm(start_hour, start_minute, stop_hour, stop_minute)?;
        log::debug!("working hours set to {schedule}");
        self.schedule = schedule;
        Ok(())
    }

    /// Add a one-off holiday.
    pub fn add_single_holiday(&mut self, date: CalendarDate) {
        self.holidays.add_single(date);
    }

    /// Add a one-off holiday on the date of `timestamp`; the time is ignored.
    pub fn add_single_holiday_at(&mut self, timestamp: Timestamp) {
        self.add_single_holiday(timestamp.date());
    }

    /// Add a holiday that recurs every year on `month`/`day`.
    ///
    /// February 29 is accepted.
    ///
    /// # Errors
    /// [`OutOfRange`](wd_core::Error::OutOfRange) if the month or day is invalid.
    pub fn add_recurring_holiday(&mut self, month: u32, day: u32) -> Result<()> {
        self.holidays.add_recurring(month, day)
    }

    /// Add `increment` working days to `start`.
    ///
    /// See [`increment`](crate::increment) for how the walk proceeds.
    pub fn add_workday_increment(&self, start: Timestamp, increment: Decimal) -> Timestamp {
        crate::increment::add_workday_increment(self, &self.schedule, start, increment)
    }

    /// The working schedule in effect.
    pub fn schedule(&self) -> &WorkingSchedule {
        &self.schedule
    }

    /// The registered holidays.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl Calendar for WorkdayCalendar {
    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holidays.is_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Direction;
    use chrono::NaiveTime;
    use wd_core::Error;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_calendar_defaults() {
        let cal = WorkdayCalendar::new();
        assert_eq!(*cal.schedule(), WorkingSchedule::default());
        assert_eq!(cal.holidays().single_count(), 0);
        assert_eq!(cal.holidays().recurring_count(), 0);
    }

    #[test]
    fn failed_configuration_keeps_previous_schedule() {
        let mut cal = WorkdayCalendar::new();
        cal.configure_working_hours(8, 0, 16, 0).unwrap();
        let err = cal.configure_working_hours(17, 0, 9, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert_eq!(cal.schedule().start(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(cal.schedule().stop(), NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn classifies_holidays_and_weekends() {
        let mut cal = WorkdayCalendar::new();
        cal.add_recurring_holiday(5, 17).unwrap();
        cal.add_single_holiday(date(2004, 5, 27));
        assert!(!cal.is_working_day(date(2004, 5, 17))); // recurring, Monday
        assert!(!cal.is_working_day(date(2004, 5, 27))); // single, Thursday
        assert!(!cal.is_working_day(date(2004, 5, 22))); // Saturday
        assert!(cal.is_working_day(date(2004, 5, 26)));
        assert!(cal.is_working_day(date(2005, 5, 27)));
    }

    #[test]
    fn next_working_day_skips_holidays() {
        let mut cal = WorkdayCalendar::new();
        cal.add_recurring_holiday(5, 17).unwrap();
        cal.add_single_holiday(date(2004, 5, 27));
        assert_eq!(
            cal.next_working_day(date(2004, 5, 26), Direction::Forward),
            date(2004, 5, 28)
        );
        assert_eq!(
            cal.next_working_day(date(2004, 5, 18), Direction::Backward),
            date(2004, 5, 14)
        );
    }

    #[test]
    fn single_holiday_at_drops_time() {
        let mut cal = WorkdayCalendar::new();
        cal.add_single_holiday_at(date(2004, 5, 27).and_hms_opt(13, 45, 0).unwrap());
        assert!(cal.is_holiday(date(2004, 5, 27)));
    }
}
