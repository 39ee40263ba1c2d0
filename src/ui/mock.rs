//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use libcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("ERROR: SCIPY is NOT installed.");
//! ui.show_hint("   pip install scipy");
//!
//! assert!(ui.has_error("SCIPY"));
//! assert_eq!(ui.hints(), &["   pip install scipy".to_string()]);
//! ```

use super::UserInterface;

/// Kind of a captured line, for order-sensitive assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Message,
    Success,
    Warning,
    Error,
    Header,
    Hint,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    transcript: Vec<(LineKind, String)>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Every captured line, in output order.
    pub fn transcript(&self) -> &[(LineKind, String)] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    fn record(&mut self, kind: LineKind, msg: &str) {
        self.transcript.push((kind, msg.to_string()));
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(LineKind::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(LineKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(LineKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(LineKind::Error, msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(LineKind::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.record(LineKind::Hint, hint);
    }
}
