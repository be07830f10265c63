// src/clock/mock.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use super::Clock;

/// Deterministic clock for tests.
///
/// `sleep` advances the internal instant by the requested duration instead
/// of blocking, and every `now` reading advances it by a fixed tick so a
/// polling loop sampling this clock makes progress.
#[derive(Debug, Clone)]
pub struct MockClock {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug)]
struct MockState {
    now: DateTime<Local>,
    tick: TimeDelta,
    slept: Vec<Duration>,
}

impl MockClock {
    pub fn new(start: DateTime<Local>, tick: TimeDelta) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                now: start,
                tick,
                slept: Vec::new(),
            })),
        }
    }

    /// Durations passed to `sleep`, in call order.
    pub fn slept(&self) -> Vec<Duration> {
        self.state.lock().unwrap().slept.clone()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Local> {
        let mut state = self.state.lock().unwrap();
        let now = state.now;
        let tick = state.tick;
        state.now = now + tick;
        now
    }

    fn sleep(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap();
        state.slept.push(duration);
        state.now = state.now
            + TimeDelta::from_std(duration).unwrap_or_else(|_| TimeDelta::zero());
    }
}
