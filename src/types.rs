// src/types.rs

use std::fmt;

use crate::errors::{Result, RunatError};

/// A partially specified local time of day.
///
/// `None` means "not constrained by the user"; it is never conflated with
/// zero. The parser guarantees that `second` is always present and that
/// every present field is within its documented range (hour `0..=23`,
/// minute and second `0..=59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialTime {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl PartialTime {
    /// Full `HH:MM:SS` form with all three fields set.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// Bare second-of-minute mark; hour and minute stay unconstrained.
    pub fn mark(second: u32) -> Self {
        Self {
            hour: None,
            minute: None,
            second: Some(second),
        }
    }
}

/// The command the process is handed over to.
///
/// `argv[0]` is the executable name or path exactly as the user typed it;
/// the launcher resolves it against the search path separately and keeps the
/// original spelling as the child's own `argv[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Vec<String>,
}

impl CommandSpec {
    /// Build a command from raw argv tokens. Fails on an empty vector.
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() {
            return Err(RunatError::MissingCommand);
        }
        Ok(Self { argv })
    }

    /// The executable name or path (`argv[0]`).
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// The full argument vector including `argv[0]`.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The arguments after `argv[0]`.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

/// Shell-style quoting for log lines only. Execution always uses the raw
/// argv, so this never has to be unambiguous.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&quote_arg(arg))?;
        }
        Ok(())
    }
}

fn quote_arg(arg: &str) -> String {
    let needs_quoting = arg.is_empty()
        || arg
            .chars()
            .any(|c| c == ' ' || c == '\t' || c == '"' || c == '\'');
    if !needs_quoting {
        return arg.to_string();
    }

    if !arg.contains('"') {
        format!("\"{arg}\"")
    } else if !arg.contains('\'') {
        format!("'{arg}'")
    } else {
        // Contains both kinds; wrap in single quotes and escape the inner
        // single quotes.
        let mut out = String::with_capacity(arg.len() + 2);
        out.push('\'');
        for c in arg.chars() {
            if c == '\'' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
        out
    }
}
