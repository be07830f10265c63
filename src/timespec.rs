// src/timespec.rs

//! Time-specification grammar.
//!
//! Two shapes are accepted:
//!
//! - `HH:MM:SS` — hour `0..=23`, minute and second `0..=59`
//! - a bare second mark `0..=59`
//!
//! Anything else is an [`RunatError::InvalidTimeSpec`] naming the offending
//! string. Parsing is pure; it never reads the clock.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, RunatError};
use crate::types::PartialTime;

fn full_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+):(\d+):(\d+)$").expect("static pattern"))
}

fn mark_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)$").expect("static pattern"))
}

/// Parse a time-specification string into a [`PartialTime`].
pub fn parse(spec: &str) -> Result<PartialTime> {
    if let Some(caps) = full_re().captures(spec) {
        let hour = field(spec, &caps[1], "hour", 23)?;
        let minute = field(spec, &caps[2], "minute", 59)?;
        let second = field(spec, &caps[3], "second", 59)?;
        return Ok(PartialTime::hms(hour, minute, second));
    }

    if let Some(caps) = mark_re().captures(spec) {
        let second = field(spec, &caps[1], "second", 59)?;
        return Ok(PartialTime::mark(second));
    }

    Err(RunatError::InvalidTimeSpec {
        spec: spec.to_string(),
        reason: "expected HH:MM:SS or a bare second mark".to_string(),
    })
}

/// Parse one captured digit run and enforce its `[0..max]` range.
///
/// A run of digits too large for `u32` is out of range by definition, so the
/// parse failure maps to the same error as a failed bounds check.
fn field(spec: &str, digits: &str, name: &str, max: u32) -> Result<u32> {
    let out_of_range = || RunatError::InvalidTimeSpec {
        spec: spec.to_string(),
        reason: format!("{name} must be in the range [0..{max}]"),
    };

    let value: u32 = digits.parse().map_err(|_| out_of_range())?;
    if value > max {
        return Err(out_of_range());
    }
    Ok(value)
}
