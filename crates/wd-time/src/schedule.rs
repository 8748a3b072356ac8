//! `WorkingSchedule` — the daily working-hours window.

use chrono::{Duration, NaiveTime, Timelike};
use wd_core::{ensure, Result};

use crate::TimeOfDay;

/// Daily working window `[start, stop]`, with `start < stop`.
///
/// Immutable once built; reconfiguring a calendar replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingSchedule {
    start: TimeOfDay,
    stop: TimeOfDay,
}

impl WorkingSchedule {
    /// Build a schedule from its start and stop times of day.
    ///
    /// Both times must be whole minutes, so that minute-rounded results stay
    /// inside the window.
    ///
    /// # Errors
    /// [`OutOfRange`](wd_core::Error::OutOfRange) if either time has a
    /// seconds or sub-second part;
    /// [`InvalidConfiguration`](wd_core::Error::InvalidConfiguration) if
    /// `start` is not strictly before `stop`.
    pub fn new(start: TimeOfDay, stop: TimeOfDay) -> Result<Self> {
        for time in [start, stop] {
            ensure!(
                time.second() == 0 && time.nanosecond() == 0,
                OutOfRange,
                "working hours must be whole minutes, got {time}"
            );
        }
        ensure!(
            start < stop,
            InvalidConfiguration,
            "working day start {start} must be before stop {stop}"
        );
        Ok(Self { start, stop })
    }

    /// Build a schedule from hours and minutes.
    ///
    /// # Errors
    /// [`OutOfRange`](wd_core::Error::OutOfRange) if an hour is not in
    /// `[0, 23]` or a minute is not in `[0, 59]`;
    /// [`InvalidConfiguration`](wd_core::Error::InvalidConfiguration) if the
    /// start is not strictly before the stop.
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        stop_hour: u32,
        stop_minute: u32,
    ) -> Result<Self> {
        Self::new(
            time_of_day(start_hour, start_minute)?,
            time_of_day(stop_hour, stop_minute)?,
        )
    }

    /// Start of the working window.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End of the working window.
    pub fn stop(&self) -> TimeOfDay {
        self.stop
    }

    /// Length of one working day (`stop - start`), always positive.
    pub fn duration(&self) -> Duration {
        self.stop.signed_duration_since(self.start)
    }

    /// Return `true` if `time` lies within `[start, stop]`.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.stop
    }
}

impl Default for WorkingSchedule {
    /// 09:00-17:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            stop: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
        }
    }
}

impl std::fmt::Display for WorkingSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.stop.format("%H:%M")
        )
    }
}

fn time_of_day(hour: u32, minute: u32) -> Result<TimeOfDay> {
    ensure!(hour < 24, OutOfRange, "hour {hour} out of range [0, 23]");
    ensure!(minute < 60, OutOfRange, "minute {minute} out of range [0, 59]");
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| wd_core::Error::OutOfRange(format!("invalid time {hour}:{minute:02}")))
}
