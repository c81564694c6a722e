//! Theme table lookup with a fixed fallback chain.

use std::sync::LazyLock;

use super::{DesignValues, ThemeTable};
use crate::types::{ButtonState, ButtonStatus, ThemeMode};

/// Last-resort values when even `light/primary/default` is missing.
static FALLBACK_DESIGN_VALUES: LazyLock<DesignValues> =
    LazyLock::new(|| DesignValues::new("#000", "#000", "#fff"));

/// Get the design values for a (mode, status, state) key.
///
/// Lookup order:
/// 1. `table[mode][status][state]`
/// 2. `table[light][primary][default]`
/// 3. a built-in black/black/white constant
///
/// The fallback deliberately ignores the requested mode and status. This
/// never fails.
pub fn get_theme_styles(
    table: &ThemeTable,
    mode: ThemeMode,
    status: ButtonStatus,
    state: ButtonState,
) -> &DesignValues {
    if let Some(values) = table.get(mode, status, state) {
        return values;
    }

    tracing::debug!(
        %mode, %status, %state,
        "no theme entry, falling back to light/primary/default"
    );
    fallback_design_values(table)
}

/// The values used when a key is missing from `table`.
pub fn fallback_design_values(table: &ThemeTable) -> &DesignValues {
    table
        .get(ThemeMode::Light, ButtonStatus::Primary, ButtonState::Default)
        .unwrap_or(&*FALLBACK_DESIGN_VALUES)
}

impl ThemeTable {
    /// Resolve design values for a key. See [`get_theme_styles`].
    pub fn resolve(
        &self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
    ) -> &DesignValues {
        get_theme_styles(self, mode, status, state)
    }
}
