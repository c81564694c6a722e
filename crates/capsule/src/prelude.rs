//! Prelude module for Capsule.
//!
//! ```
//! use capsule::prelude::*;
//! ```
//!
//! This provides access to:
//! - The button façade (`Button`, `ButtonElement`, strategies and layouts)
//! - Renderer capabilities (`IconRenderer`, `TextRenderer` and the built-ins)
//! - Style axes and theme types from the style crate

// ============================================================================
// Button
// ============================================================================

pub use crate::button::{
    Button, ButtonDescriptor, ButtonElement, ButtonStyle, ButtonType, IconSlot, SlotLayout,
    StyleStrategy,
};
pub use crate::global::GlobalStyles;

// ============================================================================
// Renderers
// ============================================================================

pub use crate::icon::{BuiltinIcon, BuiltinIcons, IconGlyph, IconRenderer, IconRequest};
pub use crate::text::{PlainText, TextRenderer, TextRequest, TextRun};

// ============================================================================
// Theme
// ============================================================================

pub use capsule_style::prelude::*;
