use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use runat::clock::mock::MockClock;
use runat::clock::{Clock, SystemClock};
use runat::wait::wait_until;

/// Base instant for the mock clock; its concrete value is irrelevant.
fn base() -> DateTime<Local> {
    Local::now()
}

#[test]
fn returns_immediately_when_target_already_passed() {
    let start = base();
    let clock = MockClock::new(start, TimeDelta::milliseconds(1));

    let target = start - TimeDelta::seconds(5);
    let arrived = wait_until(&clock, target);

    assert!(arrived >= target);
    assert!(clock.slept().is_empty());
}

#[test]
fn short_horizon_skips_the_coarse_sleep() {
    let start = base();
    let clock = MockClock::new(start, TimeDelta::milliseconds(10));

    let target = start + TimeDelta::milliseconds(900);
    let arrived = wait_until(&clock, target);

    assert!(arrived >= target);
    assert!(clock.slept().is_empty(), "sub-threshold horizon must poll only");
}

#[test]
fn long_horizon_sleeps_whole_truncated_seconds_then_polls() {
    let start = base();
    let clock = MockClock::new(start, TimeDelta::milliseconds(10));

    let target = start + TimeDelta::milliseconds(4_700);
    let arrived = wait_until(&clock, target);

    assert!(arrived >= target);
    // A 4.7 s horizon sleeps exactly 4 whole seconds (truncated, never
    // rounded up past the target); polling covers the remainder.
    assert_eq!(clock.slept(), vec![Duration::from_secs(4)]);
}

#[test]
fn never_returns_before_the_target() {
    let start = base();
    let clock = MockClock::new(start, TimeDelta::milliseconds(3));

    let target = start + TimeDelta::milliseconds(2_050);
    let arrived = wait_until(&clock, target);

    assert!(arrived >= target);
    // Overshoot is bounded by one sampling tick.
    assert!(arrived - target <= TimeDelta::milliseconds(3));
}

#[test]
fn real_clock_overshoot_is_bounded() {
    let clock = SystemClock;

    let target = clock.now() + TimeDelta::milliseconds(1_300);
    let arrived = wait_until(&clock, target);

    assert!(arrived >= target);
    assert!(arrived - target < TimeDelta::milliseconds(500));
}
