// src/clock/mod.rs

use std::fmt::Debug;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

pub mod mock;

/// Abstract time source for the wait loop.
///
/// `now` reads the current local wall-clock time; `sleep` blocks the calling
/// thread. The wait loop is written against this trait so its behaviour can
/// be exercised without real delays.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Local>;
    fn sleep(&self, duration: Duration);
}

/// Implementation backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
