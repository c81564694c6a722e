//! Nested theme tables: mode → status → state → design values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DesignPatch, DesignValues};
use crate::types::{ButtonState, ButtonStatus, ThemeMode};

/// State → design values for one status.
pub type StateTable = BTreeMap<ButtonState, DesignValues>;

/// Status → state table for one mode.
pub type StatusTable = BTreeMap<ButtonStatus, StateTable>;

/// A complete theme lookup table.
///
/// The shipped defaults are available from [`ThemeTable::defaults`].
/// Customisation never mutates a table in place; overrides are merged into a
/// new table by [`merge_theme_config`](super::merge_theme_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTable {
    modes: BTreeMap<ThemeMode, StatusTable>,
}

impl ThemeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the exact entry for a key.
    pub fn get(
        &self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
    ) -> Option<&DesignValues> {
        self.modes.get(&mode)?.get(&status)?.get(&state)
    }

    /// Insert an entry, returning the previous one.
    pub fn insert(
        &mut self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
        values: DesignValues,
    ) -> Option<DesignValues> {
        self.modes
            .entry(mode)
            .or_default()
            .entry(status)
            .or_default()
            .insert(state, values)
    }

    /// Insert an entry using builder pattern.
    pub fn with(
        mut self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
        values: DesignValues,
    ) -> Self {
        self.insert(mode, status, state, values);
        self
    }

    /// The status table for a mode.
    pub fn mode(&self, mode: ThemeMode) -> Option<&StatusTable> {
        self.modes.get(&mode)
    }

    pub(crate) fn mode_entry(&mut self, mode: ThemeMode) -> &mut StatusTable {
        self.modes.entry(mode).or_default()
    }

    /// Iterate over every leaf in key order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ThemeMode, ButtonStatus, ButtonState, &DesignValues)> {
        self.modes.iter().flat_map(|(mode, statuses)| {
            statuses.iter().flat_map(move |(status, states)| {
                states
                    .iter()
                    .map(move |(state, values)| (*mode, *status, *state, values))
            })
        })
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the table has no leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// State → patch overrides for one status. `None` entries are ignored.
pub type StateConfig = BTreeMap<ButtonState, Option<DesignPatch>>;

/// Status → state overrides for one mode. `None` entries are ignored.
pub type StatusConfig = BTreeMap<ButtonStatus, Option<StateConfig>>;

/// A partial override of a [`ThemeTable`].
///
/// Every branch is optional. Explicit `null`s in JSON input deserialize to
/// `None` and are skipped during merging, exactly like omitted keys.
///
/// ```
/// use capsule_style::prelude::*;
///
/// let config = ThemeConfig::new().with(
///     ThemeMode::Light,
///     ButtonStatus::Primary,
///     ButtonState::Default,
///     DesignPatch::new().background_color("#123"),
/// );
/// assert_eq!(config.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeConfig {
    modes: BTreeMap<ThemeMode, Option<StatusConfig>>,
}

impl ThemeConfig {
    /// Create an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patch for a key, combining with any patch already present.
    pub fn set(
        &mut self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
        patch: DesignPatch,
    ) {
        let slot = self
            .modes
            .entry(mode)
            .or_default()
            .get_or_insert_with(StatusConfig::new)
            .entry(status)
            .or_default()
            .get_or_insert_with(StateConfig::new)
            .entry(state)
            .or_default();

        if let Some(existing) = slot.as_mut() {
            merge_patch(existing, &patch);
        } else {
            *slot = Some(patch);
        }
    }

    /// Set the patch for a key using builder pattern.
    pub fn with(
        mut self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
        patch: DesignPatch,
    ) -> Self {
        self.set(mode, status, state, patch);
        self
    }

    /// The patch stored for a key, if any.
    pub fn get(
        &self,
        mode: ThemeMode,
        status: ButtonStatus,
        state: ButtonState,
    ) -> Option<&DesignPatch> {
        self.modes
            .get(&mode)?
            .as_ref()?
            .get(&status)?
            .as_ref()?
            .get(&state)?
            .as_ref()
    }

    /// Iterate over every present patch, skipping `None` branches.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ThemeMode, ButtonStatus, ButtonState, &DesignPatch)> {
        self.modes
            .iter()
            .filter_map(|(mode, statuses)| statuses.as_ref().map(|s| (*mode, s)))
            .flat_map(|(mode, statuses)| {
                statuses
                    .iter()
                    .filter_map(|(status, states)| states.as_ref().map(|s| (*status, s)))
                    .flat_map(move |(status, states)| {
                        states.iter().filter_map(move |(state, patch)| {
                            patch.as_ref().map(|patch| (mode, status, *state, patch))
                        })
                    })
            })
    }

    /// Number of present patches.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the override carries no patches.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_patch(target: &mut DesignPatch, source: &DesignPatch) {
    macro_rules! take_if_set {
        ($($field:ident),+ $(,)?) => {
            $(
                if source.$field.is_some() {
                    target.$field = source.$field.clone();
                }
            )+
        };
    }

    take_if_set!(
        background_color,
        border_color,
        content_color,
        border_width,
        font_weight,
        border_radius,
    );
}
