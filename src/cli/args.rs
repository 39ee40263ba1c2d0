//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. None of the flags change what
//! is checked; they only pick the interpreter and shape the output.

use clap::Parser;
use std::path::PathBuf;

/// libcheck - Verify that required Python libraries are installed.
#[derive(Debug, Parser)]
#[command(name = "libcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter to probe (name on PATH or path to an executable)
    #[arg(long, env = "LIBCHECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Hide headers and detail lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
