//! Deep merge of partial overrides onto a theme table.

use std::borrow::Cow;

use super::resolve::fallback_design_values;
use super::{ThemeConfig, ThemeTable};
use crate::types::{ButtonState, ButtonStatus, ThemeMode};

/// Merge an optional override onto `base`, producing a complete table.
///
/// - No override: `base` is returned borrowed, unchanged.
/// - Otherwise `base` is copied and every present override leaf field
///   replaces the corresponding base field. Absent and `null` fields are
///   skipped, so defaults can be replaced but never erased.
/// - Branches the override does not mention are copied from `base` as-is.
/// - A patch aimed at a leaf `base` lacks is completed with the fallback
///   colours of the merged table, after every existing leaf has been
///   patched. The result never holds a partial leaf.
///
/// `base` is never modified.
pub fn merge_theme_config<'a>(
    base: &'a ThemeTable,
    config: Option<&ThemeConfig>,
) -> Cow<'a, ThemeTable> {
    let Some(config) = config else {
        return Cow::Borrowed(base);
    };

    let mut merged = base.clone();
    let mut created = Vec::new();
    let mut patched = 0usize;

    for (mode, status, state, patch) in config.iter() {
        let states = merged.mode_entry(mode).entry(status).or_default();
        match states.get_mut(&state) {
            Some(leaf) => leaf.apply(patch),
            None => created.push((mode, status, state, patch)),
        }
        patched += 1;
    }

    // A created fallback leaf must exist before the others are completed.
    created.sort_by_key(|&(mode, status, state, _)| (mode, status, state) != FALLBACK_KEY);

    for (mode, status, state, patch) in created {
        let values = patch.complete_over(fallback_design_values(&merged));
        merged
            .mode_entry(mode)
            .entry(status)
            .or_default()
            .insert(state, values);
    }

    tracing::trace!(patched, "merged theme config");
    Cow::Owned(merged)
}

const FALLBACK_KEY: (ThemeMode, ButtonStatus, ButtonState) =
    (ThemeMode::Light, ButtonStatus::Primary, ButtonState::Default);

impl ThemeTable {
    /// Merge an override onto this table. See [`merge_theme_config`].
    pub fn merged<'a>(&'a self, config: Option<&ThemeConfig>) -> Cow<'a, ThemeTable> {
        merge_theme_config(self, config)
    }
}
