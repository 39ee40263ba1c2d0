//! Remediation hints printed after a check.

/// Build the batched install command for missing libraries.
///
/// Returns `None` when nothing is missing.
pub fn pip_install_command(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    Some(format!("pip install {}", missing.join(" ")))
}

/// Hint shown when the GUI toolkit cannot be imported.
pub fn gui_system_package(package: &str) -> String {
    format!(
        "   On some systems, it requires installing the '{}' package.",
        package
    )
}

/// Lead-in before the install command.
pub fn install_intro() -> &'static str {
    "To fix this, install the missing packages in your PyCharm project terminal:"
}

/// Closing hint after a failed check.
pub fn after_install() -> &'static str {
    "After successful installation, please re-run this script to verify."
}

/// Encouragement after a clean check.
pub fn ready() -> &'static str {
    "You are ready to run your full assignment code!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_when_nothing_missing() {
        assert_eq!(pip_install_command(&[]), None);
    }

    #[test]
    fn single_missing_package() {
        let cmd = pip_install_command(&["scipy".to_string()]);
        assert_eq!(cmd.as_deref(), Some("pip install scipy"));
    }

    #[test]
    fn multiple_missing_packages_keep_order() {
        let cmd = pip_install_command(&["pandas".to_string(), "matplotlib".to_string()]);
        assert_eq!(cmd.as_deref(), Some("pip install pandas matplotlib"));
    }

    #[test]
    fn gui_hint_names_package() {
        assert!(gui_system_package("python-tk").contains("'python-tk'"));
    }

    #[test]
    fn remediation_text_is_verbatim() {
        assert_eq!(
            after_install(),
            "After successful installation, please re-run this script to verify."
        );
        assert_eq!(
            install_intro(),
            "To fix this, install the missing packages in your PyCharm project terminal:"
        );
    }
}
