//! Theme pipeline for Capsule buttons.
//!
//! This crate turns a button's style axes (size, status, state, mode) into
//! concrete design values:
//!
//! - **Tokens**: closed enums for every axis, with lenient validity predicates
//! - **Variables**: `var(--<property>-<index>)` references into the host's scale
//! - **Theme tables**: built-in defaults, partial overrides and a deep merge
//! - **Resolution**: lookup with a fixed fallback chain that never fails
//! - **Derivation**: the layered status/state alternative over a flat theme
//! - **Config**: overrides loaded from TOML or JSON files
//! - **Hot Reload**: watch theme files during development (`hot-reload` feature)
//!
//! # Example
//!
//! ```
//! use capsule_style::prelude::*;
//!
//! let config = ThemeConfig::new().with(
//!     ThemeMode::Light,
//!     ButtonStatus::Primary,
//!     ButtonState::Default,
//!     DesignPatch::new().background_color("#123"),
//! );
//!
//! let table = merge_theme_config(ThemeTable::defaults(), Some(&config));
//! let values = get_theme_styles(&table, ThemeMode::Light, ButtonStatus::Primary, ButtonState::Default);
//! assert_eq!(values.background_color, "#123");
//! assert_eq!(values.content_color, "#fff");
//! ```

pub mod config;
pub mod derive;
pub mod radius;
pub mod store;
pub mod theme;
pub mod types;
pub mod variables;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod de;
mod error;

pub use error::{Error, Result};
pub use variables::css_var;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::ConfigFormat;
    pub use crate::derive::{
        ButtonTheme, StyleDelta, ThemeColors, ThemeCssVariables, derive_styles, icon_color,
        merge_theme, should_render_icon, state_styles, status_styles,
    };
    pub use crate::radius::{px_radius, resolve_border_radius};
    pub use crate::store::ThemeStore;
    pub use crate::theme::{
        DesignPatch, DesignValues, ThemeConfig, ThemeTable, get_theme_styles, merge_theme_config,
    };
    pub use crate::types::{
        ButtonSize, ButtonState, ButtonStatus, Cursor, IconPosition, StateVocabulary, ThemeMode,
        is_valid_size, is_valid_state, is_valid_status,
    };
    pub use crate::variables::{ThemeVariables, css_var};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::{ThemeTarget, ThemeWatcher};
}
