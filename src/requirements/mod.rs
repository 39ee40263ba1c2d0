//! Library requirement checking.
//!
//! This module provides tools for detecting whether the Python libraries a
//! project depends on are importable, and for reporting what is missing.
//!
//! # Modules
//!
//! - [`checker`] - The environment check itself
//! - [`probe`] - Interpreter-backed module probing
//! - [`registry`] - The fixed list of required libraries
//! - [`status`] - Outcome and report types

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::EnvironmentChecker;
pub use probe::{ModuleProbe, PythonProbe};
pub use registry::{GuiToolkit, Requirement, RequirementRegistry};
pub use status::{CheckReport, CheckResult, GuiStatus, ImportOutcome};
