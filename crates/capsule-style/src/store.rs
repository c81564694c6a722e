//! Shared, swappable theme overrides.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::derive::ButtonTheme;
use crate::theme::ThemeConfig;

/// Holds the application's current theme overrides.
///
/// Buttons take cheap `Arc` snapshots; replacing an override never affects
/// a snapshot already handed out. The generation counter increases on every
/// change so hosts can tell when to re-render.
#[derive(Debug, Default)]
pub struct ThemeStore {
    config: RwLock<Option<Arc<ThemeConfig>>>,
    theme: RwLock<Option<Arc<ButtonTheme>>>,
    generation: AtomicU64,
}

impl ThemeStore {
    /// Create a store with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current table override, if any.
    pub fn config(&self) -> Option<Arc<ThemeConfig>> {
        self.config.read().clone()
    }

    /// Replace the table override.
    pub fn set_config(&self, config: Option<ThemeConfig>) {
        *self.config.write() = config.map(Arc::new);
        self.bump();
    }

    /// Current flat theme override, if any.
    pub fn theme(&self) -> Option<Arc<ButtonTheme>> {
        self.theme.read().clone()
    }

    /// Replace the flat theme override.
    pub fn set_theme(&self, theme: Option<ButtonTheme>) {
        *self.theme.write() = theme.map(Arc::new);
        self.bump();
    }

    /// Number of changes made so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn bump(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(generation, "theme store updated");
    }
}
