//! Global style injection point.
//!
//! Buttons only reference custom properties such as `--cell-height-3`; the
//! host defines them. [`GlobalStyles`] renders a `:root` block the host can
//! inject once. It is empty unless variables are added.

use std::fmt;

use capsule_style::variables::ThemeVariables;

/// Custom property definitions emitted under `:root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalStyles {
    variables: ThemeVariables,
}

impl GlobalStyles {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block from existing variables.
    pub fn from_variables(variables: ThemeVariables) -> Self {
        Self { variables }
    }

    /// Define a custom property. A leading `--` is optional.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.set(name, value);
    }

    /// Define a custom property using builder pattern.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_variable(name, value);
        self
    }

    /// The defined properties.
    pub fn variables(&self) -> &ThemeVariables {
        &self.variables
    }

    /// Whether no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Render the `:root` block.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GlobalStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for (name, value) in self.variables.iter() {
            writeln!(f, "  --{name}: {value};")?;
        }
        writeln!(f, "}}")
    }
}
