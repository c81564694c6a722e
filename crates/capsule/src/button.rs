//! The themable pill button.
//!
//! This module provides [`Button`], a presentational button that resolves its
//! colours from a theme table and delegates icon and label drawing to
//! renderers supplied at construction time.
//!
//! # Example
//!
//! ```
//! use capsule::prelude::*;
//!
//! let button = Button::new("Save")
//!     .with_status(ButtonStatus::Secondary)
//!     .with_icon("check")
//!     .with_icon_position(IconPosition::Left);
//!
//! let element = button.render();
//! assert!(element.label.is_some());
//! assert_eq!(element.style.border_radius, "calc(var(--cell-height-3) / 2)");
//! ```

use std::fmt;
use std::sync::Arc;

use capsule_style::css_var;
use capsule_style::derive::{ButtonTheme, derive_styles, icon_color, merge_theme, should_render_icon};
use capsule_style::radius::{px_radius, resolve_border_radius};
use capsule_style::store::ThemeStore;
use capsule_style::theme::{DesignValues, ThemeConfig, ThemeTable, get_theme_styles, merge_theme_config};
use capsule_style::types::{ButtonSize, ButtonState, ButtonStatus, Cursor, IconPosition, ThemeMode};

use crate::icon::{BuiltinIcons, IconRenderer, IconRequest};
use crate::text::{PlainText, TextRenderer, TextRequest};

/// Shared click callback.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// The HTML-style `type` of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// How design values are obtained for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleStrategy {
    /// Look up the merged theme table with the fixed fallback chain.
    #[default]
    Table,
    /// Layer state deltas over status colours from a flat [`ButtonTheme`].
    Layered,
}

/// What happens to an icon slot that holds no icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotLayout {
    /// Both slots are always rendered; the empty one gets a spacer.
    #[default]
    Reserved,
    /// Only the slot holding the icon is rendered.
    Collapsed,
}

/// Props shared by every renderer combination.
#[derive(Clone)]
struct ButtonProps {
    label: Option<String>,
    size: ButtonSize,
    status: ButtonStatus,
    state: ButtonState,
    mode: ThemeMode,
    icon: Option<String>,
    icon_position: IconPosition,
    icon_rotation: f32,
    disabled: bool,
    full_width: bool,
    border_radius: Option<String>,
    config: Option<Arc<ThemeConfig>>,
    theme: Option<Arc<ButtonTheme>>,
    button_type: ButtonType,
    aria_label: Option<String>,
    test_id: Option<String>,
    class_name: Option<String>,
    bordered: bool,
    condensed: bool,
    background_color: Option<String>,
    background_image: Option<String>,
    border_color: Option<String>,
    border_width: u8,
    font_weight: u8,
    antialiased: bool,
    strategy: StyleStrategy,
    slot_layout: SlotLayout,
    on_click: Option<ClickHandler>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: None,
            size: ButtonSize::default(),
            status: ButtonStatus::default(),
            state: ButtonState::default(),
            mode: ThemeMode::default(),
            icon: None,
            icon_position: IconPosition::default(),
            icon_rotation: 0.0,
            disabled: false,
            full_width: false,
            border_radius: None,
            config: None,
            theme: None,
            button_type: ButtonType::default(),
            aria_label: None,
            test_id: None,
            class_name: None,
            bordered: true,
            condensed: false,
            background_color: None,
            background_image: None,
            border_color: None,
            border_width: 1,
            font_weight: 3,
            antialiased: false,
            strategy: StyleStrategy::default(),
            slot_layout: SlotLayout::default(),
            on_click: None,
        }
    }
}

/// A themable pill button.
///
/// `I` draws icons and `T` draws the label. Both are fixed when the button is
/// built; [`Button::new`] uses [`BuiltinIcons`] and [`PlainText`].
///
/// Every render is a pure function of the props: the theme table is merged,
/// design values are resolved for `(mode, status, actual state)` and the
/// results are handed to the renderers. Nothing here fails; bad input
/// degrades to fallback colours.
#[derive(Clone)]
pub struct Button<I = BuiltinIcons, T = PlainText> {
    props: ButtonProps,
    icons: Option<I>,
    text: T,
}

impl Button {
    /// Create a labelled button with the built-in renderers.
    pub fn new(label: impl Into<String>) -> Self {
        Self::default().with_label(label)
    }

    /// Create a button without a label, usually icon-only.
    pub fn unlabeled() -> Self {
        Self::default()
    }
}

impl Default for Button {
    fn default() -> Self {
        Self {
            props: ButtonProps::default(),
            icons: Some(BuiltinIcons),
            text: PlainText,
        }
    }
}

impl<I, T> fmt::Debug for Button<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.props.label)
            .field("size", &self.props.size)
            .field("status", &self.props.status)
            .field("state", &self.actual_state())
            .field("mode", &self.props.mode)
            .field("icon", &self.props.icon)
            .field("strategy", &self.props.strategy)
            .finish_non_exhaustive()
    }
}

impl<I, T> Button<I, T> {
    // =========================================================================
    // Renderers
    // =========================================================================

    /// Replace the icon renderer.
    pub fn with_icon_renderer<J>(self, renderer: J) -> Button<J, T> {
        Button {
            props: self.props,
            icons: Some(renderer),
            text: self.text,
        }
    }

    /// Detach the icon renderer; no icon slots are rendered at all.
    pub fn without_icon_renderer(self) -> Self {
        Self {
            icons: None,
            ..self
        }
    }

    /// Replace the label renderer.
    pub fn with_text_renderer<U>(self, renderer: U) -> Button<I, U> {
        Button {
            props: self.props,
            icons: self.icons,
            text: renderer,
        }
    }

    // =========================================================================
    // Style Axes
    // =========================================================================

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.props.label = Some(label.into());
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.props.size = size;
        self
    }

    pub fn with_status(mut self, status: ButtonStatus) -> Self {
        self.props.status = status;
        self
    }

    pub fn with_state(mut self, state: ButtonState) -> Self {
        self.props.state = state;
        self
    }

    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.props.mode = mode;
        self
    }

    /// Disable the button. Disabling forces the `disabled` visual state and
    /// drops the click handler from rendered elements.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    // =========================================================================
    // Icon
    // =========================================================================

    pub fn with_icon(mut self, name: impl Into<String>) -> Self {
        self.props.icon = Some(name.into());
        self
    }

    pub fn with_icon_position(mut self, position: IconPosition) -> Self {
        self.props.icon_position = position;
        self
    }

    /// Icon rotation in degrees.
    pub fn with_icon_rotation(mut self, degrees: f32) -> Self {
        self.props.icon_rotation = degrees;
        self
    }

    pub fn with_slot_layout(mut self, layout: SlotLayout) -> Self {
        self.props.slot_layout = layout;
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = full_width;
        self
    }

    /// Override the border radius with a literal CSS value.
    pub fn with_border_radius(mut self, radius: impl Into<String>) -> Self {
        self.props.border_radius = Some(radius.into());
        self
    }

    /// Override the border radius with a pixel length.
    pub fn with_border_radius_px(self, px: f64) -> Self {
        self.with_border_radius(px_radius(px))
    }

    pub fn with_bordered(mut self, bordered: bool) -> Self {
        self.props.bordered = bordered;
        self
    }

    /// Halve the horizontal padding.
    pub fn with_condensed(mut self, condensed: bool) -> Self {
        self.props.condensed = condensed;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.props.background_color = Some(color.into());
        self
    }

    pub fn with_background_image(mut self, image: impl Into<String>) -> Self {
        self.props.background_image = Some(image.into());
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.props.border_color = Some(color.into());
        self
    }

    /// Index into `--border-width-N`, used when the theme sets no width.
    pub fn with_border_width(mut self, index: u8) -> Self {
        self.props.border_width = index;
        self
    }

    /// Index into `--font-weight-N` for the label.
    pub fn with_font_weight(mut self, index: u8) -> Self {
        self.props.font_weight = index;
        self
    }

    pub fn with_antialiased(mut self, antialiased: bool) -> Self {
        self.props.antialiased = antialiased;
        self
    }

    // =========================================================================
    // Theming
    // =========================================================================

    /// Override entries of the default theme table.
    pub fn with_theme_config(mut self, config: impl Into<Arc<ThemeConfig>>) -> Self {
        self.props.config = Some(config.into());
        self
    }

    /// Flat theme used by [`StyleStrategy::Layered`].
    pub fn with_theme(mut self, theme: impl Into<Arc<ButtonTheme>>) -> Self {
        self.props.theme = Some(theme.into());
        self
    }

    /// Take the current overrides from a shared store.
    pub fn with_store(mut self, store: &ThemeStore) -> Self {
        self.props.config = store.config();
        self.props.theme = store.theme();
        self
    }

    pub fn with_strategy(mut self, strategy: StyleStrategy) -> Self {
        self.props.strategy = strategy;
        self
    }

    // =========================================================================
    // Behaviour & Accessibility
    // =========================================================================

    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.props.button_type = button_type;
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.props.aria_label = Some(label.into());
        self
    }

    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.props.test_id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class: impl Into<String>) -> Self {
        self.props.class_name = Some(class.into());
        self
    }

    /// Set the click callback. It is never attached while disabled.
    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.props.on_click = Some(Arc::new(handler));
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Whether the button is disabled by flag or by state.
    pub fn is_disabled(&self) -> bool {
        self.props.disabled || self.props.state == ButtonState::Disabled
    }

    /// The state used for styling; `Disabled` whenever the button is disabled.
    pub fn actual_state(&self) -> ButtonState {
        if self.is_disabled() {
            ButtonState::Disabled
        } else {
            self.props.state
        }
    }

    fn has_icon(&self) -> bool {
        self.props.icon.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Resolve the inputs for one render pass.
    pub fn describe(&self) -> ButtonDescriptor {
        let props = &self.props;
        let state = self.actual_state();

        let (design, icon_color, opacity, pointer_events, cursor) = match props.strategy {
            StyleStrategy::Table => {
                let merged = merge_theme_config(ThemeTable::defaults(), props.config.as_deref());
                let design = get_theme_styles(&merged, props.mode, props.status, state).clone();
                let icon_color = design.content_color.clone();
                (design, icon_color, None, None, None)
            }
            StyleStrategy::Layered => {
                let theme = merge_theme(props.theme.as_deref());
                let delta = derive_styles(props.status, state, &theme);
                let design = delta.to_design_values(theme.css_variables.border_width.clone());
                let icon_color = icon_color(props.status, &theme)
                    .unwrap_or_else(|| design.content_color.clone());
                (design, icon_color, delta.opacity, delta.pointer_events, delta.cursor)
            }
        };

        let radius_override = props.border_radius.as_deref().or(design.border_radius.as_deref());
        let border_radius = resolve_border_radius(props.size, radius_override);
        let interactive = state != ButtonState::Disabled;

        ButtonDescriptor {
            size: props.size,
            mode: props.mode,
            status: props.status,
            state,
            icon: props.icon.clone().filter(|name| !name.is_empty()),
            icon_position: props.icon_position,
            icon_rotation: props.icon_rotation,
            icon_color,
            design,
            full_width: props.full_width,
            bordered: props.bordered,
            condensed: props.condensed,
            border_radius,
            interactive,
            opacity,
            pointer_events,
            cursor: cursor.unwrap_or(if interactive {
                Cursor::Pointer
            } else {
                Cursor::NotAllowed
            }),
        }
    }

    /// Compute the element's style declarations.
    pub fn style(&self) -> ButtonStyle {
        self.style_for(&self.describe())
    }

    fn style_for(&self, descriptor: &ButtonDescriptor) -> ButtonStyle {
        let props = &self.props;
        let design = &descriptor.design;
        let height = css_var("cell-height", descriptor.size.index().into(), None);

        let trailing_divisor = if props.condensed && !self.has_icon() { 2 } else { 1 };
        let leading_divisor = if props.condensed { 2 } else { 1 };
        let padding = format!(
            "0 calc({height} / {trailing_divisor}) 0 calc({height} / {leading_divisor})"
        );

        let border = if props.bordered {
            let width = design
                .border_width
                .clone()
                .unwrap_or_else(|| css_var("border-width", props.border_width.into(), None));
            let color = props.border_color.as_deref().unwrap_or(&design.border_color);
            format!("{width} solid {color}")
        } else {
            "none".to_string()
        };

        ButtonStyle {
            padding,
            width: if props.full_width { "100%" } else { "auto" }.to_string(),
            font_weight: design
                .font_weight
                .clone()
                .unwrap_or_else(|| css_var("font-weight", 2, None)),
            background_color: props
                .background_color
                .clone()
                .unwrap_or_else(|| design.background_color.clone()),
            background_image: props
                .background_image
                .clone()
                .unwrap_or_else(|| "none".to_string()),
            border,
            color: design.content_color.clone(),
            border_radius: descriptor.border_radius.clone(),
            cursor: descriptor.cursor,
            opacity: descriptor.opacity,
            pointer_events: descriptor.pointer_events,
        }
    }
}

impl<I: IconRenderer, T: TextRenderer> Button<I, T> {
    /// Render the button into an element tree.
    pub fn render(self) -> ButtonElement<I::Output, T::Output> {
        let descriptor = self.describe();
        let style = self.style_for(&descriptor);

        let icon_slot = |position: IconPosition| -> Option<IconSlot<I::Output>> {
            let renderer = self.icons.as_ref()?;
            let holds_icon = should_render_icon(
                false,
                descriptor.icon.as_deref(),
                descriptor.icon_position,
                position,
            );
            let request = match (holds_icon, &descriptor.icon) {
                (true, Some(name)) => IconRequest::named(
                    name.clone(),
                    descriptor.size,
                    descriptor.icon_color.clone(),
                    descriptor.icon_rotation,
                ),
                _ if self.props.slot_layout == SlotLayout::Reserved => {
                    IconRequest::spacer(descriptor.size, descriptor.icon_color.clone())
                }
                _ => return None,
            };
            let output = renderer.render_icon(&request);
            Some(IconSlot {
                position,
                request,
                output,
            })
        };

        let leading = icon_slot(IconPosition::Left);
        let trailing = icon_slot(IconPosition::Right);

        let label = self
            .props
            .label
            .as_deref()
            .filter(|content| !content.is_empty())
            .map(|content| {
                self.text.render_text(&TextRequest {
                    content: content.to_string(),
                    color: descriptor.design.content_color.clone(),
                    font_weight: self.props.font_weight,
                    size: descriptor.size,
                    antialiased: self.props.antialiased,
                })
            });

        let on_click = if descriptor.interactive {
            self.props.on_click.clone()
        } else {
            None
        };

        tracing::trace!(
            status = %descriptor.status,
            state = %descriptor.state,
            mode = %descriptor.mode,
            "rendered button"
        );

        ButtonElement {
            disabled: !descriptor.interactive,
            button_type: self.props.button_type,
            aria_label: self.props.aria_label,
            test_id: self.props.test_id,
            class_name: self.props.class_name,
            descriptor,
            style,
            leading,
            label,
            trailing,
            on_click,
        }
    }
}

/// Resolved inputs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonDescriptor {
    pub size: ButtonSize,
    pub mode: ThemeMode,
    pub status: ButtonStatus,
    /// The state actually used for lookup.
    pub state: ButtonState,
    pub icon: Option<String>,
    pub icon_position: IconPosition,
    pub icon_rotation: f32,
    pub icon_color: String,
    pub design: DesignValues,
    pub full_width: bool,
    pub bordered: bool,
    pub condensed: bool,
    pub border_radius: String,
    pub interactive: bool,
    pub opacity: Option<f32>,
    pub pointer_events: Option<bool>,
    pub cursor: Cursor,
}

/// CSS-like declarations for the outer button element.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub padding: String,
    pub width: String,
    pub font_weight: String,
    pub background_color: String,
    pub background_image: String,
    pub border: String,
    pub color: String,
    pub border_radius: String,
    pub cursor: Cursor,
    pub opacity: Option<f32>,
    pub pointer_events: Option<bool>,
}

impl ButtonStyle {
    /// `(property, value)` pairs in emission order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = vec![
            ("padding", self.padding.clone()),
            ("width", self.width.clone()),
            ("font-weight", self.font_weight.clone()),
            ("background-color", self.background_color.clone()),
            ("background-image", self.background_image.clone()),
            ("border", self.border.clone()),
            ("color", self.color.clone()),
            ("border-radius", self.border_radius.clone()),
            ("cursor", self.cursor.as_css().to_string()),
        ];
        if let Some(opacity) = self.opacity {
            declarations.push(("opacity", opacity.to_string()));
        }
        if let Some(enabled) = self.pointer_events {
            declarations.push(("pointer-events", if enabled { "auto" } else { "none" }.into()));
        }
        declarations
    }

    /// Render the declarations as a CSS block body.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in self.declarations() {
            writeln!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// One rendered icon slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSlot<O> {
    pub position: IconPosition,
    pub request: IconRequest,
    pub output: O,
}

/// A rendered button.
pub struct ButtonElement<IO, TO> {
    pub descriptor: ButtonDescriptor,
    pub style: ButtonStyle,
    pub button_type: ButtonType,
    pub disabled: bool,
    pub aria_label: Option<String>,
    pub test_id: Option<String>,
    pub class_name: Option<String>,
    pub leading: Option<IconSlot<IO>>,
    pub label: Option<TO>,
    pub trailing: Option<IconSlot<IO>>,
    /// Always `None` for disabled buttons.
    pub on_click: Option<ClickHandler>,
}

impl<IO, TO> ButtonElement<IO, TO> {
    /// Invoke the click handler. Returns whether one ran.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Rendered icon slots, leading first.
    pub fn icon_slots(&self) -> impl Iterator<Item = &IconSlot<IO>> {
        self.leading.iter().chain(self.trailing.iter())
    }
}

impl<IO: fmt::Debug, TO: fmt::Debug> fmt::Debug for ButtonElement<IO, TO> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonElement")
            .field("descriptor", &self.descriptor)
            .field("style", &self.style)
            .field("button_type", &self.button_type)
            .field("disabled", &self.disabled)
            .field("leading", &self.leading)
            .field("label", &self.label)
            .field("trailing", &self.trailing)
            .field("has_click_handler", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_props() {
        let descriptor = Button::new("Go").describe();

        assert_eq!(descriptor.size, ButtonSize::Three);
        assert_eq!(descriptor.status, ButtonStatus::Primary);
        assert_eq!(descriptor.state, ButtonState::Default);
        assert_eq!(descriptor.mode, ThemeMode::Light);
        assert_eq!(descriptor.icon_position, IconPosition::Right);
        assert!(descriptor.bordered);
        assert!(descriptor.interactive);
        assert_eq!(descriptor.cursor, Cursor::Pointer);
    }

    #[test]
    fn state_disabled_counts_as_disabled() {
        let button = Button::new("Go").with_state(ButtonState::Disabled);
        assert!(button.is_disabled());
        assert!(!button.describe().interactive);
    }

    #[test]
    fn padding_halves_when_condensed() {
        let plain = Button::new("Go").with_condensed(true).style();
        assert_eq!(
            plain.padding,
            "0 calc(var(--cell-height-3) / 2) 0 calc(var(--cell-height-3) / 2)"
        );

        let with_icon = Button::new("Go")
            .with_condensed(true)
            .with_icon("arrow")
            .style();
        assert_eq!(
            with_icon.padding,
            "0 calc(var(--cell-height-3) / 1) 0 calc(var(--cell-height-3) / 2)"
        );
    }

    #[test]
    fn border_none_when_unbordered() {
        let style = Button::new("Go").with_bordered(false).style();
        assert_eq!(style.border, "none");
    }

    #[test]
    fn pixel_radius_override() {
        let style = Button::new("Go").with_border_radius_px(6.0).style();
        assert_eq!(style.border_radius, "6px");
    }

    #[test]
    fn pointer_events_declaration() {
        let style = ButtonStyle {
            padding: "0".into(),
            width: "auto".into(),
            font_weight: "400".into(),
            background_color: "red".into(),
            background_image: "none".into(),
            border: "none".into(),
            color: "blue".into(),
            border_radius: "4px".into(),
            cursor: Cursor::NotAllowed,
            opacity: Some(0.5),
            pointer_events: Some(false),
        };

        let declarations = style.declarations();
        assert_eq!(declarations.len(), 11);
        assert_eq!(declarations[8], ("cursor", "not-allowed".to_string()));
        assert_eq!(declarations[9], ("opacity", "0.5".to_string()));
        assert_eq!(declarations[10], ("pointer-events", "none".to_string()));
    }
}
