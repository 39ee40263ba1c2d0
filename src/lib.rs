//! libcheck - Verify that a Python development environment is ready.
//!
//! libcheck asks a Python interpreter to import each required library,
//! prints one status line per library plus a GUI toolkit check, and ends
//! with a verdict and a `pip install` command for whatever is missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Interpreter and output configuration
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Required libraries, probing, and the check itself
//! - [`ui`] - Styled terminal output
//!
//! # Example
//!
//! ```
//! use libcheck::requirements::{
//!     EnvironmentChecker, ImportOutcome, ModuleProbe, RequirementRegistry,
//! };
//! use libcheck::ui::MockUI;
//!
//! struct NothingInstalled;
//!
//! impl ModuleProbe for NothingInstalled {
//!     fn import(&self, _module: &str) -> ImportOutcome {
//!         ImportOutcome::NotFound
//!     }
//!
//!     fn tk_patchlevel(&self, _module: &str) -> libcheck::Result<String> {
//!         unreachable!()
//!     }
//! }
//!
//! let registry = RequirementRegistry::new();
//! let mut ui = MockUI::new();
//! let report = EnvironmentChecker::new(&registry, &NothingInstalled).run(&mut ui);
//!
//! assert!(!report.all_installed);
//! assert_eq!(
//!     report.install_command().as_deref(),
//!     Some("pip install pandas numpy scipy matplotlib")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod ui;

pub use error::{CheckError, Result};
