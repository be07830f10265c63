// src/resolve.rs

//! Rollover arithmetic turning a [`PartialTime`] into a concrete instant.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use tracing::debug;

use crate::types::PartialTime;

/// Resolve the nearest instant at or after `now` whose local time-of-day
/// matches every present field of `spec`, truncated to whole seconds.
///
/// Corrections are applied from the least significant field upward, each
/// only when that field is present. A field whose value has already passed
/// inside its containing unit first rolls the instant into the next unit,
/// then the offset to the target value is added. This order is load-bearing:
/// a bare mark resolves without ever touching minute or hour, while a full
/// `HH:MM:SS` compounds the carries up to a day. Resolving hour before
/// second with the same local increments gives wrong answers near unit
/// boundaries.
///
/// `now` must be captured once by the caller; the computation itself never
/// reads the clock, so there is no skew between steps.
pub fn next_occurrence<Tz: TimeZone>(spec: &PartialTime, now: DateTime<Tz>) -> DateTime<Tz> {
    let mut then = now;

    if let Some(second) = spec.second {
        if second < then.second() {
            // The mark has passed inside this minute; roll into the next.
            let step = TimeDelta::seconds(i64::from(60 - then.second()));
            then = then + step;
            debug!(added_secs = step.num_seconds(), "rolled into the next minute");
        }
        if second > then.second() {
            let step = TimeDelta::seconds(i64::from(second - then.second()));
            then = then + step;
            debug!(added_secs = step.num_seconds(), "advanced to the target second");
        }
    }

    if let Some(minute) = spec.minute {
        if minute < then.minute() {
            let step = TimeDelta::minutes(i64::from(60 - then.minute()));
            then = then + step;
            debug!(added_mins = step.num_minutes(), "rolled into the next hour");
        }
        if minute > then.minute() {
            let step = TimeDelta::minutes(i64::from(minute - then.minute()));
            then = then + step;
            debug!(added_mins = step.num_minutes(), "advanced to the target minute");
        }
    }

    if let Some(hour) = spec.hour {
        if hour < then.hour() {
            // The hour has passed today; roll into the next day.
            let step = TimeDelta::hours(i64::from(24 - then.hour()));
            then = then + step;
            debug!(added_hours = step.num_hours(), "rolled into the next day");
        }
        if hour > then.hour() {
            let step = TimeDelta::hours(i64::from(hour - then.hour()));
            then = then + step;
            debug!(added_hours = step.num_hours(), "advanced to the target hour");
        }
    }

    truncate_subsec(then)
}

/// Drop the sub-second component (truncation, not rounding).
fn truncate_subsec<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    let nanos = i64::from(t.timestamp_subsec_nanos());
    t - TimeDelta::nanoseconds(nanos)
}
