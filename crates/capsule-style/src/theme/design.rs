//! Design value tuples and their partial overrides.

use serde::{Deserialize, Serialize};

use crate::de::table_deserialize;

/// Resolved presentational values for one (mode, status, state) key.
///
/// The three colour tokens are always present. The remaining fields are
/// optional refinements; when absent the button falls back to its own
/// scale-derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignValues {
    /// Background colour token.
    pub background_color: String,
    /// Border colour token.
    pub border_color: String,
    /// Text and icon colour token.
    #[serde(rename = "color")]
    pub content_color: String,
    /// Border width length token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    /// Font weight token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Corner radius length token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl DesignValues {
    /// Create values with the three core colours set.
    pub fn new(
        background_color: impl Into<String>,
        border_color: impl Into<String>,
        content_color: impl Into<String>,
    ) -> Self {
        Self {
            background_color: background_color.into(),
            border_color: border_color.into(),
            content_color: content_color.into(),
            border_width: None,
            font_weight: None,
            border_radius: None,
        }
    }

    /// Set the border width using builder pattern.
    pub fn with_border_width(mut self, width: impl Into<String>) -> Self {
        self.border_width = Some(width.into());
        self
    }

    /// Set the font weight using builder pattern.
    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Set the border radius using builder pattern.
    pub fn with_border_radius(mut self, radius: impl Into<String>) -> Self {
        self.border_radius = Some(radius.into());
        self
    }

    /// Overlay a patch onto these values.
    ///
    /// Only fields present in `patch` are copied; they replace the current
    /// value outright.
    pub fn apply(&mut self, patch: &DesignPatch) {
        macro_rules! overlay_if_set {
            (required: $($req:ident),+; optional: $($opt:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &patch.$req {
                        self.$req = value.clone();
                    }
                )+
                $(
                    if let Some(value) = &patch.$opt {
                        self.$opt = Some(value.clone());
                    }
                )+
            };
        }

        overlay_if_set!(
            required: background_color, border_color, content_color;
            optional: border_width, font_weight, border_radius,
        );
    }

    /// Return a copy with `patch` overlaid.
    pub fn patched(&self, patch: &DesignPatch) -> Self {
        let mut values = self.clone();
        values.apply(patch);
        values
    }
}

/// A partial [`DesignValues`] used in theme overrides.
///
/// Absent (or `null`) fields leave the underlying value untouched; there is
/// no way to erase a default. Patches only load from tables; a sequence in
/// their place is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub content_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl DesignPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the background colour.
    pub fn background_color(mut self, value: impl Into<String>) -> Self {
        self.background_color = Some(value.into());
        self
    }

    /// Override the border colour.
    pub fn border_color(mut self, value: impl Into<String>) -> Self {
        self.border_color = Some(value.into());
        self
    }

    /// Override the content colour.
    pub fn content_color(mut self, value: impl Into<String>) -> Self {
        self.content_color = Some(value.into());
        self
    }

    /// Override the border width.
    pub fn border_width(mut self, value: impl Into<String>) -> Self {
        self.border_width = Some(value.into());
        self
    }

    /// Override the font weight.
    pub fn font_weight(mut self, value: impl Into<String>) -> Self {
        self.font_weight = Some(value.into());
        self
    }

    /// Override the border radius.
    pub fn border_radius(mut self, value: impl Into<String>) -> Self {
        self.border_radius = Some(value.into());
        self
    }

    /// Whether the patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build complete values from this patch, taking missing core colours
    /// from `fallback`.
    ///
    /// Optional fields of `fallback` are not inherited.
    pub fn complete_over(&self, fallback: &DesignValues) -> DesignValues {
        DesignValues::new(
            fallback.background_color.clone(),
            fallback.border_color.clone(),
            fallback.content_color.clone(),
        )
        .patched(self)
    }
}

#[derive(Deserialize)]
#[serde(remote = "DesignValues", rename_all = "camelCase")]
#[allow(dead_code)]
struct DesignValuesDef {
    background_color: String,
    border_color: String,
    #[serde(rename = "color", alias = "contentColor")]
    content_color: String,
    #[serde(default)]
    border_width: Option<String>,
    #[serde(default)]
    font_weight: Option<String>,
    #[serde(default)]
    border_radius: Option<String>,
}

table_deserialize!(DesignValues => DesignValuesDef, "a table of design values");

#[derive(Deserialize)]
#[serde(remote = "DesignPatch", rename_all = "camelCase")]
#[allow(dead_code)]
struct DesignPatchDef {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    border_color: Option<String>,
    #[serde(default, rename = "color", alias = "contentColor")]
    content_color: Option<String>,
    #[serde(default)]
    border_width: Option<String>,
    #[serde(default)]
    font_weight: Option<String>,
    #[serde(default)]
    border_radius: Option<String>,
}

table_deserialize!(DesignPatch => DesignPatchDef, "a table of design overrides");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut values = DesignValues::new("#000", "#000", "#fff");
        values.apply(&DesignPatch::new().background_color("#123").border_width("2px"));

        assert_eq!(values.background_color, "#123");
        assert_eq!(values.border_color, "#000");
        assert_eq!(values.content_color, "#fff");
        assert_eq!(values.border_width.as_deref(), Some("2px"));
        assert_eq!(values.font_weight, None);
    }

    #[test]
    fn empty_patch_is_identity() {
        let values = DesignValues::new("#e3e3e3", "#ccc", "#888").with_font_weight("600");
        assert!(DesignPatch::new().is_empty());
        assert_eq!(values.patched(&DesignPatch::new()), values);
    }

    #[test]
    fn complete_over_fills_core_colours_only() {
        let fallback = DesignValues::new("#000", "#000", "#fff").with_border_radius("4px");
        let values = DesignPatch::new().content_color("#f00").complete_over(&fallback);

        assert_eq!(values, DesignValues::new("#000", "#000", "#f00"));
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let patch: DesignPatch =
            serde_json::from_str(r##"{"backgroundColor": null, "color": "#abc"}"##).unwrap();

        assert_eq!(patch.background_color, None);
        assert_eq!(patch.content_color.as_deref(), Some("#abc"));
    }

    #[test]
    fn content_color_accepts_both_keys() {
        let a: DesignValues =
            serde_json::from_str(r##"{"backgroundColor":"#000","borderColor":"#000","color":"#fff"}"##)
                .unwrap();
        let b: DesignValues = serde_json::from_str(
            r##"{"backgroundColor":"#000","borderColor":"#000","contentColor":"#fff"}"##,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sequences_are_not_positional_fields() {
        let err = serde_json::from_str::<DesignPatch>(r##"["#f00", "#0f0", "#00f"]"##)
            .unwrap_err();
        assert!(err.to_string().contains("a table of design overrides"));

        assert!(serde_json::from_str::<DesignValues>(r##"["#f00", "#0f0", "#00f"]"##).is_err());
        assert!(serde_json::from_str::<DesignPatch>(r#"["x"]"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patch: DesignPatch =
            serde_json::from_str(r##"{"shadow": "none", "borderWidth": "2px"}"##).unwrap();
        assert_eq!(patch, DesignPatch::new().border_width("2px"));
    }
}
