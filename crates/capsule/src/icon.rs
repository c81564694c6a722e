//! Icon rendering capability.
//!
//! A [`Button`](crate::Button) never draws icons itself. It builds an
//! [`IconRequest`] per slot and hands it to an [`IconRenderer`] chosen when
//! the button is constructed. [`BuiltinIcons`] covers a small catalogue;
//! any `Fn(&IconRequest) -> O` closure works as a custom renderer.

use std::fmt;
use std::str::FromStr;

use capsule_style::types::ButtonSize;
use capsule_style::{Error, css_var};

/// Everything an icon renderer needs to draw one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRequest {
    /// Icon name. `None` asks for a same-sized invisible spacer.
    pub name: Option<String>,
    pub size: ButtonSize,
    pub color: String,
    /// Rotation in degrees.
    pub rotation: f32,
    pub stroke_width: f32,
}

impl IconRequest {
    /// Stroke width used for every button icon.
    pub const STROKE_WIDTH: f32 = 2.0;

    /// Request a named icon.
    pub fn named(
        name: impl Into<String>,
        size: ButtonSize,
        color: impl Into<String>,
        rotation: f32,
    ) -> Self {
        Self {
            name: Some(name.into()),
            size,
            color: color.into(),
            rotation,
            stroke_width: Self::STROKE_WIDTH,
        }
    }

    /// Request a spacer that only occupies the slot.
    pub fn spacer(size: ButtonSize, color: impl Into<String>) -> Self {
        Self {
            name: None,
            size,
            color: color.into(),
            rotation: 0.0,
            stroke_width: Self::STROKE_WIDTH,
        }
    }

    /// Whether this request is for a spacer.
    pub fn is_spacer(&self) -> bool {
        self.name.is_none()
    }
}

/// Draws icons for button slots.
pub trait IconRenderer {
    /// What the renderer produces for one slot.
    type Output;

    /// Render one slot.
    fn render_icon(&self, request: &IconRequest) -> Self::Output;
}

impl<F, O> IconRenderer for F
where
    F: Fn(&IconRequest) -> O,
{
    type Output = O;

    fn render_icon(&self, request: &IconRequest) -> O {
        self(request)
    }
}

/// Icons available from [`BuiltinIcons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinIcon {
    Arrow,
    Check,
    Plus,
    Search,
    X,
}

impl BuiltinIcon {
    /// All built-in icons.
    pub const ALL: &'static [BuiltinIcon] = &[
        BuiltinIcon::Arrow,
        BuiltinIcon::Check,
        BuiltinIcon::Plus,
        BuiltinIcon::Search,
        BuiltinIcon::X,
    ];

    /// The icon's name.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinIcon::Arrow => "arrow",
            BuiltinIcon::Check => "check",
            BuiltinIcon::Plus => "plus",
            BuiltinIcon::Search => "search",
            BuiltinIcon::X => "x",
        }
    }
}

impl fmt::Display for BuiltinIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinIcon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| Error::unknown_token("icon", s))
    }
}

/// A resolved icon ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGlyph {
    /// `None` for spacers.
    pub icon: Option<BuiltinIcon>,
    /// Edge length of the square slot.
    pub extent: String,
    pub color: String,
    pub rotation: f32,
    pub stroke_width: f32,
}

impl IconGlyph {
    /// Whether this glyph draws nothing.
    pub fn is_spacer(&self) -> bool {
        self.icon.is_none()
    }
}

/// Renderer for the built-in icon catalogue.
///
/// Unknown names degrade to a spacer so the layout is unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIcons;

impl IconRenderer for BuiltinIcons {
    type Output = IconGlyph;

    fn render_icon(&self, request: &IconRequest) -> IconGlyph {
        let icon = request.name.as_deref().and_then(|name| {
            let parsed = name.parse::<BuiltinIcon>().ok();
            if parsed.is_none() {
                tracing::debug!(name, "unknown built-in icon, rendering spacer");
            }
            parsed
        });

        IconGlyph {
            icon,
            extent: css_var("cell-height", request.size.index().into(), None),
            color: request.color.clone(),
            rotation: if icon.is_some() { request.rotation } else { 0.0 },
            stroke_width: request.stroke_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_renders_known_icon() {
        let glyph = BuiltinIcons.render_icon(&IconRequest::named(
            "arrow",
            ButtonSize::Two,
            "#fff",
            90.0,
        ));

        assert_eq!(glyph.icon, Some(BuiltinIcon::Arrow));
        assert_eq!(glyph.extent, "var(--cell-height-2)");
        assert_eq!(glyph.rotation, 90.0);
        assert_eq!(glyph.stroke_width, 2.0);
    }

    #[test]
    fn spacer_and_unknown_names_render_blank() {
        let spacer = BuiltinIcons.render_icon(&IconRequest::spacer(ButtonSize::Three, "#000"));
        assert!(spacer.is_spacer());
        assert_eq!(spacer.extent, "var(--cell-height-3)");

        let unknown = BuiltinIcons.render_icon(&IconRequest::named(
            "rocket",
            ButtonSize::Three,
            "#000",
            45.0,
        ));
        assert!(unknown.is_spacer());
        assert_eq!(unknown.rotation, 0.0);
    }

    #[test]
    fn closures_are_renderers() {
        let names = |request: &IconRequest| request.name.clone().unwrap_or_default();

        assert_eq!(
            names.render_icon(&IconRequest::named("x", ButtonSize::One, "red", 0.0)),
            "x"
        );
        assert_eq!(names.render_icon(&IconRequest::spacer(ButtonSize::One, "red")), "");
    }

    #[test]
    fn icon_names_parse() {
        assert_eq!("search".parse::<BuiltinIcon>().unwrap(), BuiltinIcon::Search);
        assert!("Search".parse::<BuiltinIcon>().is_err());
        assert_eq!(BuiltinIcon::Plus.to_string(), "plus");
    }
}
