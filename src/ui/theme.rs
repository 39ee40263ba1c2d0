//! Visual theme and styling.

use console::Style;

/// libcheck's visual theme.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section headers (bold magenta).
    pub header: Style,
    /// Style for remediation hints (magenta).
    pub hint: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Format a remediation hint.
    pub fn format_hint(&self, hint: &str) -> String {
        self.hint.apply_to(hint).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_header_is_unchanged() {
        let theme = CheckTheme::plain();
        assert_eq!(
            theme.format_header("--- GUI Library Check ---"),
            "--- GUI Library Check ---"
        );
    }

    #[test]
    fn plain_hint_is_unchanged() {
        let theme = CheckTheme::plain();
        assert_eq!(theme.format_hint("   pip install scipy"), "   pip install scipy");
    }

    #[test]
    fn themed_header_contains_title() {
        let theme = CheckTheme::new();
        assert!(theme.format_header("Title").contains("Title"));
    }
}
