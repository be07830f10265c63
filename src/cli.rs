// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Options must appear before the time specification. Everything from the
//! time specification onward belongs to the command, including tokens that
//! look like options, so `runat 30 sleep 10 -h` runs `sleep 10 -h` rather
//! than printing help.

use clap::{ArgAction, Parser};

use crate::errors::{Result, RunatError};
use crate::types::CommandSpec;

const LONG_ABOUT: &str = "\
Run a command at a specific time with a resolution of one second.

Useful for analyzing process race conditions: several separate invocations
aimed at the same instant start their commands within microseconds of one
another, without any coordination between them.

Two time-specification formats are accepted:

  HH:MM:SS  Run the command at this specific local time. If it has already
            passed today, it runs tomorrow.

  MARK      Run the command at this second mark of the current minute. If
            the mark has already passed, it rolls over to the next minute.

The mark form means you never have to look at the full clock. If the current
time is 14:22:17, a mark of 30 starts the command at 14:22:30 and a mark of
10 starts it at 14:23:10.";

const AFTER_HELP: &str = "\
Examples:
  # Run a command at the 30 second mark.
  runat 30 sleep 5

  # Run a command at a specific time (use cron/at for more control).
  runat 13:47:10 sleep 5

  # Start the same race from three terminals; all three commands begin
  # within microseconds of each other at the next 30 second mark.
  runat 30 /bin/bash -c \"echo win1 && date\"
  runat 30 /bin/bash -c \"echo win2 && date\"
  runat 30 /bin/bash -c \"echo win3 && date\"

  # -h after the time specification belongs to the command, not runat.
  runat 30 sleep 10 -h

Exit status: the launched command's own exit status, or 1 if the command
line is not syntactically correct or the executable cannot be found.";

/// Command-line arguments for `runat`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runat",
    version,
    about = "Run a command at a specific time with a resolution of one second.",
    long_about = LONG_ABOUT,
    after_long_help = AFTER_HELP,
    override_usage = "runat [OPTIONS] <TIMESPEC> <COMMAND>..."
)]
pub struct CliArgs {
    /// Increase the level of verbosity (-v progress, -vv tracing).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Time specification (`HH:MM:SS` or a bare second mark), followed by
    /// the command to run and its arguments.
    #[arg(
        value_name = "TIMESPEC",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub rest: Vec<String>,
}

impl CliArgs {
    /// Split the raw trailing tokens into the `(timespec, command)` pair.
    pub fn into_inputs(self) -> Result<(String, CommandSpec)> {
        let mut rest = self.rest.into_iter();
        let timespec = rest.next().ok_or(RunatError::MissingTimeSpec)?;
        let command = CommandSpec::new(rest.collect())?;
        Ok((timespec, command))
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
