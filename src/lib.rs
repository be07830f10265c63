// src/lib.rs

pub mod cli;
pub mod clock;
pub mod errors;
pub mod launch;
pub mod logging;
pub mod resolve;
pub mod timespec;
pub mod types;
pub mod wait;

use std::env;
use std::ffi::OsString;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::clock::{Clock, SystemClock};
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together, strictly in order:
/// - splitting the raw arguments into `(timespec, command)`
/// - parsing the time specification
/// - resolving the next matching instant against a single clock reading
/// - resolving the command's binary on the search path
/// - waiting for the instant to arrive
/// - handing the process over to the command
///
/// The binary is resolved *before* the wait so an unresolvable command fails
/// immediately instead of after the scheduled delay.
///
/// On Unix this returns only on failure; the launch replaces the process
/// image. Elsewhere it returns the exit status of the spawned command, which
/// `main` passes through verbatim.
pub fn run(args: CliArgs) -> Result<i32> {
    let (spec_str, command) = args.into_inputs()?;
    info!(timespec = %spec_str, command = %command, "parsed input");

    let partial = timespec::parse(&spec_str)?;

    let clock = SystemClock;
    let now = clock.now();
    debug!(now = %now, "captured current instant");

    let start = resolve::next_occurrence(&partial, now);
    info!(start = %start, "resolved start instant");

    let binary = launch::resolve_binary(command.program())?;
    info!(binary = %binary.display(), "resolved binary");

    // The environment is captured here and passed through explicitly so the
    // launcher never reads ambient process state.
    let env: Vec<(OsString, OsString)> = env::vars_os().collect();

    let launched_at = wait::wait_until(&clock, start);
    info!(launched_at = %launched_at, argc = command.argv().len(), command = %command, "launching");

    launch::launch(&command, &binary, env)
}
