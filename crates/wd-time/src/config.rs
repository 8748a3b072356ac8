//! Serializable calendar configuration.
//!
//! A [`CalendarConfig`] describes a whole [`WorkdayCalendar`](crate::WorkdayCalendar)
//! as plain data so it can be loaded from JSON, TOML, or any other serde
//! format. Omitted fields take their defaults (09:00-17:00, no holidays).
//!
//! ```
//! use wd_time::{CalendarConfig, WorkdayCalendar};
//!
//! let json = r#"{
//!     "working_hours": { "start_hour": 8, "start_minute": 0, "stop_hour": 16, "stop_minute": 0 },
//!     "holidays": ["2004-05-27"],
//!     "recurring_holidays": [{ "month": 5, "day": 17 }]
//! }"#;
//! let config: CalendarConfig = serde_json::from_str(json).unwrap();
//! let cal = WorkdayCalendar::from_config(&config).unwrap();
//! assert_eq!(cal.holidays().recurring_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// Complete configuration of a workday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Daily working window.
    pub working_hours: WorkingHoursConfig,
    /// One-off holidays.
    pub holidays: Vec<CalendarDate>,
    /// Holidays recurring every year.
    pub recurring_holidays: Vec<RecurringHolidayConfig>,
}

/// Start and stop of the working day, in hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHoursConfig {
    /// Hour the working day starts (0–23).
    pub start_hour: u32,
    /// Minute the working day starts (0–59).
    pub start_minute: u32,
    /// Hour the working day stops (0–23).
    pub stop_hour: u32,
    /// Minute the working day stops (0–59).
    pub stop_minute: u32,
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            start_minute: 0,
            stop_hour: 17,
            stop_minute: 0,
        }
    }
}

/// A month/day pair observed every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringHolidayConfig {
    /// Month (1–12).
    pub month: u32,
    /// Day of the month (1–31; February 29 allowed).
    pub day: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_nine_to_five() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.working_hours.start_hour, 9);
        assert_eq!(cfg.working_hours.stop_hour, 17);
        assert!(cfg.holidays.is_empty());
        assert!(cfg.recurring_holidays.is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: CalendarConfig =
            serde_json::from_str(r#"{ "working_hours": { "start_hour": 7 } }"#).unwrap();
        assert_eq!(cfg.working_hours.start_hour, 7);
        assert_eq!(cfg.working_hours.start_minute, 0);
        assert_eq!(cfg.working_hours.stop_hour, 17);
        assert!(cfg.holidays.is_empty());
    }
}
