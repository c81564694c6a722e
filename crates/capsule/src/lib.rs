//! Capsule - a themable pill button.
//!
//! This crate provides [`Button`], which resolves its colours from a layered
//! theme (built-in table plus caller overrides) and hands icon and label
//! drawing to renderers chosen at construction time. The theme pipeline
//! lives in [`style`].
//!
//! # Example
//!
//! ```
//! use capsule::prelude::*;
//!
//! let element = Button::new("Delete")
//!     .with_state(ButtonState::Success)
//!     .with_disabled(true)
//!     .on_click(|| unreachable!("disabled buttons have no handler"))
//!     .render();
//!
//! assert_eq!(element.descriptor.state, ButtonState::Disabled);
//! assert!(element.on_click.is_none());
//! ```

pub mod button;
pub mod global;
pub mod icon;
pub mod prelude;
pub mod text;

pub use button::{
    Button, ButtonDescriptor, ButtonElement, ButtonStyle, ButtonType, ClickHandler, IconSlot,
    SlotLayout, StyleStrategy,
};
pub use global::GlobalStyles;
pub use icon::{BuiltinIcon, BuiltinIcons, IconGlyph, IconRenderer, IconRequest};
pub use text::{PlainText, TextRenderer, TextRequest, TextRun};

/// Theme resolution pipeline.
pub use capsule_style as style;
