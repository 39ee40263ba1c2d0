//! Requirement status types for import checks.
//!
//! Each probe query produces an `ImportOutcome`; the checker folds those into
//! a `CheckReport` describing the whole run.

/// The result of attempting to import a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Module imported. `version` is its `__version__`, when it has one.
    Loaded { version: Option<String> },

    /// Module could not be located (an `ImportError`).
    NotFound,

    /// Import or attribute access raised something other than `ImportError`,
    /// or the probe itself misbehaved.
    Failed { message: String },
}

impl ImportOutcome {
    /// Whether the module was imported.
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImportOutcome::Loaded { .. })
    }

    /// Whether the module was reported absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, ImportOutcome::NotFound)
    }
}

/// The outcome of checking a single mapped requirement.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The requirement identifier that was checked
    pub requirement: String,
    /// What the probe reported
    pub outcome: ImportOutcome,
}

/// Status of the GUI toolkit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiStatus {
    /// Toolkit imported. `patchlevel` is the Tcl/Tk patch level, if it could be read.
    Installed { patchlevel: Option<String> },

    /// Toolkit could not be imported.
    Missing,

    /// Importing the toolkit raised an unexpected error.
    Errored { message: String },
}

/// Aggregate result of one environment check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// True unless a mapped requirement or the GUI toolkit was absent.
    ///
    /// Unexpected import errors are warned about but do not clear this flag.
    pub all_installed: bool,
    /// Mapped requirements reported absent, in registry order.
    pub missing: Vec<String>,
    /// Per-requirement outcomes, in registry order.
    pub results: Vec<CheckResult>,
    /// GUI toolkit status.
    pub gui: GuiStatus,
}

impl CheckReport {
    /// Number of checks that ended in an unexpected error.
    pub fn warnings(&self) -> usize {
        let mapped = self
            .results
            .iter()
            .filter(|r| matches!(r.outcome, ImportOutcome::Failed { .. }))
            .count();
        let gui = usize::from(matches!(self.gui, GuiStatus::Errored { .. }));
        mapped + gui
    }

    /// The remediation command for the missing mapped requirements, if any.
    pub fn install_command(&self) -> Option<String> {
        crate::ui::hints::pip_install_command(&self.missing)
    }
}
