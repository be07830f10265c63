// src/wait.rs

//! The wait loop: one coarse sleep, then tight polling.

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use tracing::debug;

use crate::clock::Clock;

/// Horizon in milliseconds above which a whole-second coarse sleep happens
/// before the polling phase.
const COARSE_SLEEP_THRESHOLD_MS: i64 = 1100;

/// Block until `clock` reaches or passes `target`, returning the first
/// instant observed at or after it.
///
/// A long horizon is mostly slept away in one chunk of
/// `floor(remaining_seconds)` whole seconds; the floor keeps enough margin
/// that the sleep can never overshoot the target. The remainder is burned in
/// a tight polling loop, which is what gets separate invocations aimed at
/// the same instant to within microseconds of each other.
///
/// There is no cancellation: once entered, the wait runs to completion.
pub fn wait_until(clock: &dyn Clock, target: DateTime<Local>) -> DateTime<Local> {
    let now = clock.now();
    let remaining = target - now;

    if remaining > TimeDelta::milliseconds(COARSE_SLEEP_THRESHOLD_MS) {
        let coarse = Duration::from_secs(remaining.num_seconds() as u64);
        debug!(sleep_secs = coarse.as_secs(), "coarse sleep before polling");
        clock.sleep(coarse);
    }

    debug!("polling until the target instant");
    let mut now = clock.now();
    while now < target {
        now = clock.now();
    }
    now
}
