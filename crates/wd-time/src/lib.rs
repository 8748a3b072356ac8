//! # wd-time
//!
//! Working-day arithmetic: a holiday registry, a daily working schedule,
//! a workday classifier, and the engine that adds fractional working days to
//! a timestamp.
//!
//! Dates and times are `chrono`'s naive types; no time zones are involved.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and `Direction`.
pub mod calendar;

/// Serializable calendar configuration.
pub mod config;

/// Single-date and recurring holidays.
pub mod holidays;

/// The workday increment algorithm.
pub mod increment;

/// `WorkingSchedule` — daily working hours.
pub mod schedule;

/// `WorkdayCalendar` — the aggregate of holidays and working hours.
pub mod workday_calendar;

// ── Domain aliases ────────────────────────────────────────────────────────────

/// A date without a time of day.
pub type CalendarDate = chrono::NaiveDate;

/// A time of day without a date.
pub type TimeOfDay = chrono::NaiveTime;

/// A date combined with a time of day.
pub type Timestamp = chrono::NaiveDateTime;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, Direction};
pub use config::{CalendarConfig, RecurringHolidayConfig, WorkingHoursConfig};
pub use holidays::HolidaySet;
pub use schedule::WorkingSchedule;
pub use workday_calendar::WorkdayCalendar;
