//! Status/state style derivation over a flat theme.
//!
//! This is the layered alternative to table lookup: the status picks base
//! colours from a [`ButtonTheme`], then the state layers deltas on top. The
//! state always wins where both set a property, so a disabled primary button
//! loses its inverse background.

use serde::{Deserialize, Serialize};

use crate::de::table_deserialize;
use crate::theme::DesignValues;
use crate::types::{ButtonState, ButtonStatus, Cursor, IconPosition};

/// Semantic colour overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
}

/// Colour and width tokens, usually `var(...)` references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCssVariables {
    pub content_color: Option<String>,
    pub content_color_inverse: Option<String>,
    pub background_color: Option<String>,
    pub background_color_inverse: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<String>,
}

/// A flat button theme.
///
/// [`ButtonTheme::default`] holds the built-in tokens; user themes are
/// partial and combined with it by [`merge_theme`]. A loaded theme starts
/// from [`ButtonTheme::empty`], so groups and fields it omits stay absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTheme {
    pub colors: ThemeColors,
    pub css_variables: ThemeCssVariables,
}

#[derive(Deserialize)]
#[serde(remote = "ThemeColors")]
#[allow(dead_code)]
struct ThemeColorsDef {
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    secondary: Option<String>,
    #[serde(default)]
    success: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    warning: Option<String>,
}

table_deserialize!(ThemeColors => ThemeColorsDef, "a table of theme colours");

#[derive(Deserialize)]
#[serde(remote = "ThemeCssVariables", rename_all = "camelCase")]
#[allow(dead_code)]
struct ThemeCssVariablesDef {
    #[serde(default)]
    content_color: Option<String>,
    #[serde(default)]
    content_color_inverse: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    background_color_inverse: Option<String>,
    #[serde(default)]
    border_color: Option<String>,
    #[serde(default)]
    border_width: Option<String>,
}

table_deserialize!(ThemeCssVariables => ThemeCssVariablesDef, "a table of css variables");

#[derive(Deserialize)]
#[serde(remote = "ButtonTheme", rename_all = "camelCase")]
#[allow(dead_code)]
struct ButtonThemeDef {
    #[serde(default)]
    colors: ThemeColors,
    #[serde(default)]
    css_variables: ThemeCssVariables,
}

table_deserialize!(ButtonTheme => ButtonThemeDef, "a button theme table");

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            css_variables: ThemeCssVariables {
                content_color: Some("var(--content-color-2)".into()),
                content_color_inverse: Some("var(--content-color-1-inverse)".into()),
                background_color: Some("transparent".into()),
                background_color_inverse: Some("var(--background-color-1-inverse)".into()),
                border_color: Some("var(--border-color-default)".into()),
                border_width: Some("var(--border-width-1)".into()),
            },
        }
    }
}

impl ButtonTheme {
    /// An empty (all-absent) theme, useful as a starting point for overrides.
    pub fn empty() -> Self {
        Self {
            colors: ThemeColors::default(),
            css_variables: ThemeCssVariables::default(),
        }
    }
}

/// Combine a user theme with the built-in defaults.
///
/// Each group is overlaid field by field; absent user fields keep the
/// default.
pub fn merge_theme(user: Option<&ButtonTheme>) -> ButtonTheme {
    let mut merged = ButtonTheme::default();
    let Some(user) = user else {
        return merged;
    };

    macro_rules! overlay {
        ($group:ident: $($field:ident),+ $(,)?) => {
            $(
                if let Some(value) = &user.$group.$field {
                    merged.$group.$field = Some(value.clone());
                }
            )+
        };
    }

    overlay!(colors: primary, secondary, success, error, warning);
    overlay!(css_variables:
        content_color,
        content_color_inverse,
        background_color,
        background_color_inverse,
        border_color,
        border_width,
    );

    merged
}

/// Presentational deltas produced by style derivation.
///
/// `None` means "not set by this layer".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDelta {
    pub background_color: Option<String>,
    pub content_color: Option<String>,
    pub border_color: Option<String>,
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub pointer_events: Option<bool>,
}

impl StyleDelta {
    /// Layer `over` on top of this delta.
    pub fn layer(&mut self, over: &StyleDelta) {
        macro_rules! layer_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if over.$prop.is_some() {
                        self.$prop = over.$prop.clone();
                    }
                )+
            };
        }

        layer_if_set!(
            background_color,
            content_color,
            border_color,
            opacity,
            cursor,
            pointer_events,
        );
    }

    /// Return this delta with `over` layered on top.
    pub fn layered(mut self, over: &StyleDelta) -> Self {
        self.layer(over);
        self
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert into design values.
    ///
    /// Unset colours become `transparent` (background, border) and
    /// `currentColor` (content).
    pub fn to_design_values(&self, border_width: Option<String>) -> DesignValues {
        let mut values = DesignValues::new(
            self.background_color.as_deref().unwrap_or("transparent"),
            self.border_color.as_deref().unwrap_or("transparent"),
            self.content_color.as_deref().unwrap_or("currentColor"),
        );
        values.border_width = border_width;
        values
    }
}

/// Base colours for a status.
///
/// Unrecognised intent falls back to the `Default` branch, which matches
/// `Secondary`.
pub fn status_styles(status: ButtonStatus, theme: &ButtonTheme) -> StyleDelta {
    let vars = &theme.css_variables;
    match status {
        ButtonStatus::Primary => StyleDelta {
            background_color: vars.background_color_inverse.clone(),
            content_color: vars.content_color_inverse.clone(),
            border_color: vars.background_color_inverse.clone(),
            ..Default::default()
        },
        ButtonStatus::Muted => StyleDelta {
            background_color: Some("transparent".into()),
            content_color: Some("var(--content-color-3)".into()),
            border_color: Some("transparent".into()),
            ..Default::default()
        },
        ButtonStatus::Highlighted => StyleDelta {
            background_color: Some("var(--color-highlight, #f0f9ff)".into()),
            content_color: Some("var(--content-color-1)".into()),
            border_color: Some("var(--color-highlight-border, #0ea5e9)".into()),
            ..Default::default()
        },
        ButtonStatus::Secondary | ButtonStatus::Default => StyleDelta {
            background_color: vars.background_color.clone(),
            content_color: vars.content_color.clone(),
            border_color: vars.border_color.clone(),
            ..Default::default()
        },
    }
}

/// Deltas for an interactive state.
///
/// `Default` and states outside the semantic vocabulary change nothing.
pub fn state_styles(state: ButtonState, theme: &ButtonTheme) -> StyleDelta {
    let semantic_border = |color: &Option<String>, fallback: &str| StyleDelta {
        border_color: Some(color.clone().unwrap_or_else(|| fallback.to_string())),
        ..Default::default()
    };

    match state {
        ButtonState::Disabled => StyleDelta {
            content_color: Some("var(--content-color-3)".into()),
            background_color: Some("transparent".into()),
            border_color: theme.css_variables.border_color.clone(),
            cursor: Some(Cursor::NotAllowed),
            pointer_events: Some(false),
            ..Default::default()
        },
        ButtonState::Success => semantic_border(&theme.colors.success, "var(--color-success)"),
        ButtonState::Error => semantic_border(&theme.colors.error, "var(--color-error)"),
        ButtonState::Warning => semantic_border(&theme.colors.warning, "var(--color-warning)"),
        ButtonState::Active => StyleDelta {
            opacity: Some(0.8),
            ..Default::default()
        },
        ButtonState::Default | ButtonState::Attention => StyleDelta::default(),
    }
}

/// Derive the full delta for a (status, state) pair: status first, state on top.
pub fn derive_styles(status: ButtonStatus, state: ButtonState, theme: &ButtonTheme) -> StyleDelta {
    status_styles(status, theme).layered(&state_styles(state, theme))
}

/// Icon colour for a status; only primary buttons force one.
pub fn icon_color(status: ButtonStatus, theme: &ButtonTheme) -> Option<String> {
    match status {
        ButtonStatus::Primary => theme.css_variables.content_color_inverse.clone(),
        _ => None,
    }
}

/// Whether an icon belongs in `slot`.
///
/// With a label present any icon is shown in every slot asked about;
/// without one only the slot matching `icon_position` qualifies.
pub fn should_render_icon(
    has_label: bool,
    icon: Option<&str>,
    icon_position: IconPosition,
    slot: IconPosition,
) -> bool {
    let has_icon = icon.is_some_and(|name| !name.is_empty());
    (has_label && has_icon) || (has_icon && icon_position == slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_theme_without_user_is_default() {
        assert_eq!(merge_theme(None), ButtonTheme::default());
    }

    #[test]
    fn merge_theme_overlays_per_field() {
        let mut user = ButtonTheme::empty();
        user.colors.success = Some("#0f0".into());
        user.css_variables.border_width = Some("3px".into());

        let merged = merge_theme(Some(&user));
        assert_eq!(merged.colors.success.as_deref(), Some("#0f0"));
        assert_eq!(merged.css_variables.border_width.as_deref(), Some("3px"));
        assert_eq!(
            merged.css_variables.content_color.as_deref(),
            Some("var(--content-color-2)")
        );
    }

    #[test]
    fn primary_uses_inverse_tokens() {
        let delta = status_styles(ButtonStatus::Primary, &ButtonTheme::default());
        assert_eq!(
            delta.background_color.as_deref(),
            Some("var(--background-color-1-inverse)")
        );
        assert_eq!(delta.border_color, delta.background_color);
        assert_eq!(
            delta.content_color.as_deref(),
            Some("var(--content-color-1-inverse)")
        );
    }

    #[test]
    fn default_status_matches_secondary() {
        let theme = ButtonTheme::default();
        assert_eq!(
            status_styles(ButtonStatus::Default, &theme),
            status_styles(ButtonStatus::Secondary, &theme)
        );
    }

    #[test]
    fn disabled_overrides_primary_background() {
        let delta = derive_styles(
            ButtonStatus::Primary,
            ButtonState::Disabled,
            &ButtonTheme::default(),
        );
        assert_eq!(delta.background_color.as_deref(), Some("transparent"));
        assert_eq!(delta.content_color.as_deref(), Some("var(--content-color-3)"));
        assert_eq!(
            delta.border_color.as_deref(),
            Some("var(--border-color-default)")
        );
        assert_eq!(delta.cursor, Some(Cursor::NotAllowed));
        assert_eq!(delta.pointer_events, Some(false));
    }

    #[test]
    fn semantic_states_only_touch_border() {
        let mut user = ButtonTheme::empty();
        user.colors.error = Some("#f00".into());
        let theme = merge_theme(Some(&user));

        let base = status_styles(ButtonStatus::Muted, &theme);
        let error = derive_styles(ButtonStatus::Muted, ButtonState::Error, &theme);
        let warning = derive_styles(ButtonStatus::Muted, ButtonState::Warning, &theme);

        assert_eq!(error.border_color.as_deref(), Some("#f00"));
        assert_eq!(warning.border_color.as_deref(), Some("var(--color-warning)"));
        assert_eq!(error.background_color, base.background_color);
        assert_eq!(error.content_color, base.content_color);
    }

    #[test]
    fn active_sets_opacity_and_default_is_empty() {
        let theme = ButtonTheme::default();
        assert_eq!(state_styles(ButtonState::Active, &theme).opacity, Some(0.8));
        assert!(state_styles(ButtonState::Default, &theme).is_empty());
        assert!(state_styles(ButtonState::Attention, &theme).is_empty());
    }

    #[test]
    fn delta_to_design_values_fills_gaps() {
        let values = StyleDelta {
            content_color: Some("#111".into()),
            ..Default::default()
        }
        .to_design_values(Some("2px".into()));

        assert_eq!(values.background_color, "transparent");
        assert_eq!(values.border_color, "transparent");
        assert_eq!(values.content_color, "#111");
        assert_eq!(values.border_width.as_deref(), Some("2px"));
    }

    #[test]
    fn icon_color_only_for_primary() {
        let theme = ButtonTheme::default();
        assert_eq!(
            icon_color(ButtonStatus::Primary, &theme).as_deref(),
            Some("var(--content-color-1-inverse)")
        );
        assert_eq!(icon_color(ButtonStatus::Secondary, &theme), None);
    }

    #[test]
    fn should_render_icon_rules() {
        use IconPosition::{Left, Right};

        assert!(should_render_icon(true, Some("arrow"), Right, Left));
        assert!(should_render_icon(false, Some("arrow"), Left, Left));
        assert!(!should_render_icon(false, Some("arrow"), Left, Right));
        assert!(!should_render_icon(true, None, Right, Right));
        assert!(!should_render_icon(true, Some(""), Right, Right));
    }

    #[test]
    fn theme_deserializes_camel_case() {
        let theme: ButtonTheme = serde_json::from_str(
            r##"{"colors":{"primary":"#6366f1"},"cssVariables":{"borderWidth":"2px"}}"##,
        )
        .unwrap();
        assert_eq!(theme.colors.primary.as_deref(), Some("#6366f1"));
        assert_eq!(theme.css_variables.border_width.as_deref(), Some("2px"));
        assert_eq!(theme.css_variables.content_color, None);
    }

    #[test]
    fn theme_groups_reject_sequences() {
        assert!(serde_json::from_str::<ButtonTheme>(r#"["a", "b"]"#).is_err());
        assert!(serde_json::from_str::<ButtonTheme>(r##"{"colors": ["#f00", "#0f0"]}"##).is_err());

        let theme: ButtonTheme = serde_json::from_str(r#"{"colors": {}}"#).unwrap();
        assert_eq!(theme, ButtonTheme::empty());
    }
}
