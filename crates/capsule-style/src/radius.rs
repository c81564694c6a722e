//! Corner radius derivation.

use crate::types::ButtonSize;
use crate::variables::css_var;

/// Resolve the border radius for a button.
///
/// An override is returned verbatim, including the empty string. Without one
/// the radius is half the cell height for `size`, giving a pill shape.
pub fn resolve_border_radius(size: ButtonSize, override_value: Option<&str>) -> String {
    if let Some(value) = override_value {
        return value.to_string();
    }

    format!("calc({} / 2)", css_var("cell-height", size.index().into(), None))
}

/// Format a pixel radius override (`8.0` → `"8px"`).
pub fn px_radius(px: f64) -> String {
    format!("{px}px")
}
