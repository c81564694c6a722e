//! CSS custom property (variable) support.
//!
//! Buttons never hard-code scale values. Heights, border widths and font
//! weights are emitted as `var(--<property>-<index>)` references that the
//! embedding application defines.

use std::collections::BTreeMap;

/// Build a reference to the scale variable `--<property>-<index>`.
///
/// When `suffix` is given it is appended to the variable name inside the
/// reference. The index is not range checked.
///
/// ```
/// use capsule_style::css_var;
///
/// assert_eq!(css_var("cell-height", 3, None), "var(--cell-height-3)");
/// assert_eq!(css_var("cell-height", 3, Some("-half")), "var(--cell-height-3-half)");
/// ```
pub fn css_var(property: &str, index: i64, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("var(--{property}-{index}{suffix})"),
        None => format!("var(--{property}-{index})"),
    }
}

/// A set of CSS custom property definitions.
///
/// Names are stored without the leading `--`. Iteration is in name order so
/// generated blocks are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: BTreeMap<String, String>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        // Remove leading "--" if present
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Set a variable using builder pattern.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.contains_key(name)
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_var_formats() {
        assert_eq!(css_var("border-width", 1, None), "var(--border-width-1)");
        assert_eq!(css_var("font-weight", 2, None), "var(--font-weight-2)");
        assert_eq!(css_var("cell-height", 9, None), "var(--cell-height-9)");
        assert_eq!(css_var("gap", -1, Some("-x")), "var(--gap--1-x)");
    }

    #[test]
    fn variables_set_get() {
        let mut vars = ThemeVariables::new();
        vars.set("--cell-height-3", "40px");

        assert_eq!(vars.get("cell-height-3"), Some("40px"));
        assert_eq!(vars.get("--cell-height-3"), Some("40px"));
        assert!(vars.contains("cell-height-3"));
        assert!(!vars.contains("cell-height-4"));
    }

    #[test]
    fn variables_iterate_in_name_order() {
        let vars = ThemeVariables::new()
            .with("cell-height-2", "32px")
            .with("border-width-1", "1px");

        let names: Vec<_> = vars.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["border-width-1", "cell-height-2"]);
        assert_eq!(vars.len(), 2);
    }
}
