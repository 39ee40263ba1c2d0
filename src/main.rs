//! libcheck CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use libcheck::cli::Cli;
use libcheck::config::CheckerConfig;
use libcheck::requirements::{EnvironmentChecker, PythonProbe, RequirementRegistry};
use libcheck::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("libcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("libcheck starting with args: {:?}", cli);

    let config = match CheckerConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            let colors = should_use_colors() && !cli.no_color;
            let mut ui = TerminalUI::new(OutputMode::from_quiet(cli.quiet), colors);
            ui.error(&format!("Error: {}", e));
            return ExitCode::FAILURE;
        }
    };

    let mut ui = TerminalUI::new(config.mode, config.colors);
    match run(&config, &mut ui) {
        // A completed check always exits successfully, even with missing libraries.
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Verify the interpreter, then run the check.
fn run(config: &CheckerConfig, ui: &mut dyn UserInterface) -> anyhow::Result<()> {
    let probe = PythonProbe::new(&config.python);
    probe.verify().with_context(|| {
        format!(
            "Python interpreter {} cannot run",
            config.python.display()
        )
    })?;

    let registry = RequirementRegistry::new();
    let report = EnvironmentChecker::new(&registry, &probe).run(ui);
    if !report.all_installed {
        tracing::info!(missing = ?report.missing, "Environment is incomplete");
    }
    Ok(())
}
