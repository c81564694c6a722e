//! Theme tables: defaults, overrides, merging and lookup.

mod defaults;
mod design;
mod merge;
mod resolve;
mod table;

pub use design::{DesignPatch, DesignValues};
pub use merge::merge_theme_config;
pub use resolve::{fallback_design_values, get_theme_styles};
pub use table::{StateConfig, StateTable, StatusConfig, StatusTable, ThemeConfig, ThemeTable};
