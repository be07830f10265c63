// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant is terminal: nothing here is retried. Components only ever
//! return these; the single `std::process::exit` call lives in `main`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunatError {
    #[error("invalid time specification '{spec}': {reason}")]
    InvalidTimeSpec { spec: String, reason: String },

    #[error("time specification missing, see help (-h) for more information")]
    MissingTimeSpec,

    #[error("command missing, see help (-h) for more information")]
    MissingCommand,

    #[error("executable not found on the search path: '{0}'")]
    ExecutableNotFound(String),

    #[error("failed to replace the process image with '{binary}': {source}")]
    ProcessReplacementFailed {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RunatError>;
