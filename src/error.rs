//! Error types for libcheck operations.
//!
//! This module defines [`CheckError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-module problems (a library missing, an import raising) are never
//!   errors here; they are reported as [`ImportOutcome`] values and printed.
//! - `CheckError` covers failures of the probing machinery itself.
//! - The binary wraps these in `anyhow::Error` to add context before printing.
//!
//! [`ImportOutcome`]: crate::requirements::ImportOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for libcheck operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// No usable Python interpreter could be located.
    #[error("No Python interpreter found (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// The interpreter process could not be started.
    #[error("Failed to run {}: {source}", interpreter.display())]
    ProbeSpawn {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The probe produced output that could not be interpreted.
    #[error("Unexpected probe output for '{module}': {message}")]
    ProbeOutput { module: String, message: String },

    /// The Tcl/Tk patch level could not be queried.
    #[error("Tk patch level unavailable: {message}")]
    TkUnavailable { message: String },

    /// The interpreter started but could not run a trivial script.
    #[error("{} exited with an error: {message}", interpreter.display())]
    InterpreterUnusable {
        interpreter: PathBuf,
        message: String,
    },
}

/// Result type alias for libcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
