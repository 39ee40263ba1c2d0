//! Environment checker.
//!
//! The `EnvironmentChecker` walks the registry once, asks the probe about
//! each library, prints a status line per library, checks the GUI toolkit,
//! and finishes with a verdict and remediation command.

use crate::requirements::probe::ModuleProbe;
use crate::requirements::registry::{GuiToolkit, Requirement, RequirementRegistry};
use crate::requirements::status::{CheckReport, CheckResult, GuiStatus, ImportOutcome};
use crate::ui::{hints, UserInterface};

/// Header printed before the library checks.
pub const LIBRARY_HEADER: &str = "--- PyCharm Environment Check: DSP Assignment Libraries ---";
/// Header printed before the GUI toolkit check.
pub const GUI_HEADER: &str = "--- GUI Library Check (Part 5) ---";
/// Rule printed before the verdict.
pub const SUMMARY_RULE: &str = "-------------------------------------------------------";
/// Placeholder when a module has no `__version__`.
pub const VERSION_NOT_FOUND: &str = "Version not found";

/// Checks whether required libraries are importable.
pub struct EnvironmentChecker<'a> {
    registry: &'a RequirementRegistry,
    probe: &'a dyn ModuleProbe,
}

impl<'a> EnvironmentChecker<'a> {
    /// Create a new checker.
    pub fn new(registry: &'a RequirementRegistry, probe: &'a dyn ModuleProbe) -> Self {
        Self { registry, probe }
    }

    /// Run every check, printing as it goes, and return the aggregate report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> CheckReport {
        let mut all_installed = true;
        let mut missing = Vec::new();
        let mut results = Vec::with_capacity(self.registry.len());

        ui.show_header(LIBRARY_HEADER);

        for req in self.registry.iter() {
            let outcome = self.check_requirement(req, ui);
            if outcome.is_missing() {
                missing.push(req.name.clone());
                all_installed = false;
            }
            results.push(CheckResult {
                requirement: req.name.clone(),
                outcome,
            });
        }

        ui.message("");
        ui.show_header(GUI_HEADER);
        let gui = self.check_gui(self.registry.gui(), ui);
        if gui == GuiStatus::Missing {
            all_installed = false;
        }

        let report = CheckReport {
            all_installed,
            missing,
            results,
            gui,
        };
        print_summary(&report, ui);

        tracing::debug!(
            all_installed = report.all_installed,
            missing = report.missing.len(),
            warnings = report.warnings(),
            "Environment check finished"
        );
        report
    }

    fn check_requirement(&self, req: &Requirement, ui: &mut dyn UserInterface) -> ImportOutcome {
        tracing::debug!(requirement = %req.name, purpose = %req.description, "Checking");

        let outcome = self.probe.import(&req.name);
        match &outcome {
            ImportOutcome::Loaded { version } => {
                ui.success(&format!(
                    "SUCCESS: {} is installed. (Version: {})",
                    req.display_name(),
                    version.as_deref().unwrap_or(VERSION_NOT_FOUND)
                ));
            }
            ImportOutcome::NotFound => {
                ui.error(&format!("ERROR: {} is NOT installed.", req.display_name()));
            }
            ImportOutcome::Failed { message } => {
                ui.warning(&format!("WARNING: Error loading {}: {}", req.name, message));
            }
        }
        outcome
    }

    fn check_gui(&self, gui: &GuiToolkit, ui: &mut dyn UserInterface) -> GuiStatus {
        match self.probe.import(&gui.module) {
            ImportOutcome::Loaded { .. } => {
                ui.success(&format!("SUCCESS: {} (GUI) is installed.", gui.display_name));
                let patchlevel = match self.probe.tk_patchlevel(&gui.module) {
                    Ok(level) => {
                        ui.message(&format!("   Tk version: {}", level));
                        Some(level)
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Tk version query failed");
                        ui.message("   Tkinter version information unavailable.");
                        None
                    }
                };
                GuiStatus::Installed { patchlevel }
            }
            ImportOutcome::NotFound => {
                ui.error(&format!(
                    "ERROR: {} (GUI) is NOT found. This is unusual.",
                    gui.display_name
                ));
                ui.show_hint(&hints::gui_system_package(&gui.system_package));
                GuiStatus::Missing
            }
            ImportOutcome::Failed { message } => {
                ui.warning(&format!(
                    "WARNING: Error loading {}: {}",
                    gui.display_name, message
                ));
                GuiStatus::Errored { message }
            }
        }
    }
}

fn print_summary(report: &CheckReport, ui: &mut dyn UserInterface) {
    ui.message("");
    ui.message(SUMMARY_RULE);

    if report.all_installed {
        ui.success("ALL REQUIRED LIBRARIES ARE INSTALLED.");
        ui.message(hints::ready());
        return;
    }

    ui.error("MISSING PACKAGES DETECTED.");
    ui.message("");
    ui.message(hints::install_intro());

    // The GUI toolkit never appears here, only mapped requirements.
    if let Some(command) = report.install_command() {
        ui.message("");
        ui.show_hint(&format!("   {}", command));
    }

    ui.message("");
    ui.message(hints::after_install());
}
