// src/logging.rs

//! Logging setup for `runat` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `-v` / `-vv` occurrence count (1 = info, 2 or more = debug)
//! 2. `RUNAT_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `warn`
//!
//! Diagnostic lines go to stdout with timestamps; errors are printed
//! separately on stderr by the top-level handler in `main`.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => std::env::var("RUNAT_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::WARN),
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    // `init()` does not return a Result, so this cannot fail at runtime
    // (if called more than once, it will panic; we only call once in main).
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
