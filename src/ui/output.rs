//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every line of the report.
    #[default]
    Normal,
    /// Show status lines, hints, and the verdict; hide headers and detail lines.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows headers and detail messages.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_quiet() {
        assert_eq!(OutputMode::from_quiet(true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_quiet(false), OutputMode::Normal);
    }

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
