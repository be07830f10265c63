// src/launch.rs

//! Search-path resolution and the final process hand-off.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::errors::{Result, RunatError};
use crate::types::CommandSpec;

/// Resolve a program name against the search path to the absolute path of
/// an existing file.
///
/// Names containing a path separator are checked directly instead of
/// searched. Callers run this *before* the wait loop so an unresolvable
/// command fails immediately rather than after the scheduled delay.
pub fn resolve_binary(program: &str) -> Result<PathBuf> {
    let not_found = || RunatError::ExecutableNotFound(program.to_string());

    let found = which::which(program).map_err(|_| not_found())?;
    let absolute = found.canonicalize().map_err(|_| not_found())?;
    if !absolute.is_file() {
        return Err(not_found());
    }

    debug!(binary = %absolute.display(), "resolved executable");
    Ok(absolute)
}

/// Hand the process over to `binary`.
///
/// The current process image is replaced outright: the launched command
/// keeps this process's identity, so its exit status is the only one the
/// invoking shell ever observes. The child's `argv[0]` is the program name
/// exactly as the user typed it, not the resolved path, and the environment
/// is the captured one, passed through unmodified.
///
/// Returning from this function at all is the failure case.
#[cfg(unix)]
pub fn launch(
    command: &CommandSpec,
    binary: &Path,
    env: Vec<(OsString, OsString)>,
) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let err = Command::new(binary)
        .arg0(command.program())
        .args(command.args())
        .env_clear()
        .envs(env)
        .exec();

    Err(RunatError::ProcessReplacementFailed {
        binary: binary.to_path_buf(),
        source: err,
    })
}

/// Hand the process over to `binary`.
///
/// This platform cannot replace its own process image, so the command runs
/// as a synchronous child and its exact exit status is returned for the top
/// level to exit with. The exit-status contract holds; the
/// no-intermediate-process property does not.
#[cfg(not(unix))]
pub fn launch(
    command: &CommandSpec,
    binary: &Path,
    env: Vec<(OsString, OsString)>,
) -> Result<i32> {
    let status = Command::new(binary)
        .args(command.args())
        .env_clear()
        .envs(env)
        .status()
        .map_err(|err| RunatError::ProcessReplacementFailed {
            binary: binary.to_path_buf(),
            source: err,
        })?;

    Ok(status.code().unwrap_or(1))
}
