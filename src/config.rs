//! Run configuration.
//!
//! Collects CLI flags and environment into a [`CheckerConfig`]. The
//! interpreter is chosen in this order:
//!
//! 1. `--python` / `LIBCHECK_PYTHON` (a bare name is looked up on PATH)
//! 2. `python3` on PATH
//! 3. `python` on PATH

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CheckError, Result};
use crate::requirements::probe::{is_executable, parse_system_path, resolve_tool_path};
use crate::ui::{should_use_colors, OutputMode};

/// Interpreter names searched on PATH when none is given.
pub const DEFAULT_INTERPRETERS: &[&str] = &["python3", "python"];

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Interpreter the probe runs
    pub python: PathBuf,
    /// Output verbosity
    pub mode: OutputMode,
    /// Whether to style output
    pub colors: bool,
}

impl CheckerConfig {
    /// Build the configuration from parsed CLI arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(cli, &parse_system_path(), should_use_colors())
    }

    /// Build the configuration against explicit PATH entries.
    ///
    /// `terminal_colors` is whether the terminal itself supports color.
    pub fn resolve(cli: &Cli, path_entries: &[PathBuf], terminal_colors: bool) -> Result<Self> {
        let python = resolve_interpreter(cli.python.as_deref(), path_entries)?;
        tracing::debug!(python = %python.display(), "Using interpreter");

        Ok(Self {
            python,
            mode: OutputMode::from_quiet(cli.quiet),
            colors: terminal_colors && !cli.no_color,
        })
    }
}

/// Locate the Python interpreter to probe.
pub fn resolve_interpreter(explicit: Option<&Path>, path_entries: &[PathBuf]) -> Result<PathBuf> {
    if let Some(explicit) = explicit {
        if let Some(name) = bare_name(explicit) {
            return resolve_tool_path(name, path_entries).ok_or_else(|| {
                CheckError::InterpreterNotFound {
                    tried: name.to_string(),
                }
            });
        }
        if explicit.is_file() && is_executable(explicit) {
            return Ok(explicit.to_path_buf());
        }
        return Err(CheckError::InterpreterNotFound {
            tried: explicit.display().to_string(),
        });
    }

    DEFAULT_INTERPRETERS
        .iter()
        .find_map(|name| resolve_tool_path(name, path_entries))
        .ok_or_else(|| CheckError::InterpreterNotFound {
            tried: DEFAULT_INTERPRETERS.join(", "),
        })
}

/// A single relative component like `python3.12` is a name to search for.
fn bare_name(path: &Path) -> Option<&str> {
    if path.is_absolute() || path.components().count() != 1 {
        return None;
    }
    path.to_str()
}
