//! # workday
//!
//! Add a fractional number of working days to a timestamp, honoring a
//! working-hours window, weekends, one-off holidays, and yearly holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workday::time::{CalendarDate, WorkdayCalendar};
//!
//! let mut cal = WorkdayCalendar::new();
//! cal.configure_working_hours(8, 0, 16, 0).unwrap();
//! cal.add_recurring_holiday(5, 17).unwrap();
//! cal.add_single_holiday(CalendarDate::from_ymd_opt(2004, 5, 27).unwrap());
//!
//! let start = CalendarDate::from_ymd_opt(2004, 5, 24)
//!     .unwrap()
//!     .and_hms_opt(8, 3, 0)
//!     .unwrap();
//! let end = cal.add_workday_increment(start, 12.782709);
//! assert_eq!(end.to_string(), "2004-06-10 14:18:00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use wd_core as core;

/// Holidays, working schedule, and the increment engine.
pub use wd_time as time;

pub use wd_core::{Error, Result};
pub use wd_time::{Timestamp, WorkdayCalendar};
