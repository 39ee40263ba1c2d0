//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{CheckTheme, OutputMode, StatusKind, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: CheckTheme,
    mode: OutputMode,
    colors: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// With `colors` off, status lines use bracketed labels instead of icons.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            CheckTheme::new()
        } else {
            CheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            colors,
        }
    }

    fn status_line(&mut self, kind: StatusKind, msg: &str) {
        let line = if self.colors {
            kind.format(&self.theme, msg)
        } else {
            kind.format_plain(msg)
        };
        writeln!(self.term, "{}", line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        self.status_line(StatusKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.status_line(StatusKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.status_line(StatusKind::Failed, msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }
}
