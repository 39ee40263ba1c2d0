//! Requirement registry and definitions.
//!
//! Defines which Python libraries the environment must provide, and the GUI
//! toolkit that is checked separately from them.

/// A required Python library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Importable module name (e.g., "numpy")
    pub name: String,
    /// What the library is needed for
    pub description: String,
}

impl Requirement {
    /// Create a requirement.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Name as shown in status lines.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// The GUI toolkit, checked after the mapped requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiToolkit {
    /// Importable module name
    pub module: String,
    /// Name as shown in status lines
    pub display_name: String,
    /// OS-level package that may need separate installation
    pub system_package: String,
}

impl Default for GuiToolkit {
    fn default() -> Self {
        Self {
            module: "tkinter".to_string(),
            display_name: "TKINTER".to_string(),
            system_package: "python-tk".to_string(),
        }
    }
}

/// Registry of required libraries, in the order they are checked.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
    gui: GuiToolkit,
}

impl Default for RequirementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementRegistry {
    /// Create a registry with the built-in requirements.
    pub fn new() -> Self {
        let requirements = vec![
            Requirement::new("pandas", "For data loading and handling."),
            Requirement::new("numpy", "For array manipulation and numerical operations."),
            Requirement::new(
                "scipy",
                "For core DSP functions (filtering, correlation, etc.).",
            ),
            Requirement::new("matplotlib", "For plotting and visualization."),
        ];

        Self {
            requirements,
            gui: GuiToolkit::default(),
        }
    }

    /// Iterate requirements in check order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    /// Number of mapped requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the registry has no mapped requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// The GUI toolkit definition.
    pub fn gui(&self) -> &GuiToolkit {
        &self.gui
    }
}
