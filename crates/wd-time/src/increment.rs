//! Increment engine — adds a signed, fractional number of working days to a
//! timestamp.
//!
//! The walk has four phases:
//!
//! 1. **Normalization.** The start is clamped into the working window in the
//!    direction of travel: a time after hours moves to the next window edge
//!    ahead, a time before hours to the previous one behind. If that lands
//!    on a non-working day, it rolls on to the nearest working day's edge.
//! 2. **Whole days.** Each full unit of the increment moves to the next
//!    working day, keeping the time of day.
//! 3. **Fraction.** The remainder is converted to a share of the working day
//!    and applied to the time of day. Whatever does not fit before the window
//!    edge is carried into the next working day, measured from its opposite
//!    edge.
//! 4. **Rounding.** The result is truncated to whole minutes towards the
//!    start: floored when moving forward, ceiled when moving backward.

use chrono::{Duration, Timelike};
use wd_core::Decimal;

use crate::calendar::{Calendar, Direction};
use crate::schedule::WorkingSchedule;
use crate::Timestamp;

/// Add `increment` working days to `start`.
///
/// A zero increment returns `start` untouched, without normalization.
/// A non-finite increment is logged and also returns `start`.
///
/// # Panics
/// If the walk leaves `chrono`'s supported date range; see
/// [`Direction::step`](crate::Direction::step).
pub fn add_workday_increment<C: Calendar + ?Sized>(
    calendar: &C,
    schedule: &WorkingSchedule,
    start: Timestamp,
    increment: Decimal,
) -> Timestamp {
    if increment == 0.0 {
        return start;
    }
    if !increment.is_finite() {
        log::warn!("ignoring non-finite workday increment {increment} from {start}");
        return start;
    }

    let direction = if increment > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };
    let mut remaining = increment.abs();
    let mut current = normalize(calendar, schedule, start, direction);
    log::trace!("normalized {start} to {current} moving {direction:?}");

    while remaining >= 1.0 {
        remaining -= 1.0;
        let date = calendar.next_working_day(current.date(), direction);
        current = date.and_time(current.time());
    }

    if remaining > 0.0 {
        current = apply_fraction(calendar, schedule, current, remaining, direction);
    }

    let result = round_to_minute(current, direction);
    log::trace!("{start} {:+} working days -> {result}", increment);
    result
}

/// Clamp `start` into the working window, looking in `direction`.
fn normalize<C: Calendar + ?Sized>(
    calendar: &C,
    schedule: &WorkingSchedule,
    start: Timestamp,
    direction: Direction,
) -> Timestamp {
    let date = start.date();
    let time = start.time();
    let clamped = match direction {
        Direction::Forward if time > schedule.stop() => {
            direction.step(date).and_time(schedule.start())
        }
        Direction::Forward if time < schedule.start() => date.and_time(schedule.start()),
        Direction::Backward if time > schedule.stop() => date.and_time(schedule.stop()),
        Direction::Backward if time < schedule.start() => {
            direction.step(date).and_time(schedule.stop())
        }
        _ => start,
    };

    if calendar.is_working_day(clamped.date()) {
        return clamped;
    }
    let date = calendar.next_working_day(clamped.date(), direction);
    match direction {
        Direction::Forward => date.and_time(schedule.start()),
        Direction::Backward => date.and_time(schedule.stop()),
    }
}

/// Apply `fraction` (in `(0, 1)`) of a working day to `current`.
fn apply_fraction<C: Calendar + ?Sized>(
    calendar: &C,
    schedule: &WorkingSchedule,
    current: Timestamp,
    fraction: Decimal,
    direction: Direction,
) -> Timestamp {
    let offset = share_of(schedule.duration(), fraction);
    let time = current.time();
    match direction {
        Direction::Forward => {
            let room = schedule.stop().signed_duration_since(time);
            if offset > room {
                let date = calendar.next_working_day(current.date(), direction);
                date.and_time(schedule.start()) + (offset - room)
            } else {
                current + offset
            }
        }
        Direction::Backward => {
            let room = time.signed_duration_since(schedule.start());
            if offset > room {
                let date = calendar.next_working_day(current.date(), direction);
                date.and_time(schedule.stop()) - (offset - room)
            } else {
                current - offset
            }
        }
    }
}

/// `fraction * duration`, rounded to the nearest nanosecond.
fn share_of(duration: Duration, fraction: Decimal) -> Duration {
    let nanos = duration.num_milliseconds() as Decimal * 1_000_000.0 * fraction;
    Duration::nanoseconds(nanos.round() as i64)
}

/// Drop the sub-minute part of `ts`, rounding up when moving backward.
fn round_to_minute(ts: Timestamp, direction: Direction) -> Timestamp {
    let time = ts.time();
    let excess = Duration::seconds(i64::from(time.second()))
        + Duration::nanoseconds(i64::from(time.nanosecond()));
    if excess == Duration::zero() {
        return ts;
    }
    match direction {
        Direction::Forward => ts - excess,
        Direction::Backward => ts - excess + Duration::minutes(1),
    }
}
