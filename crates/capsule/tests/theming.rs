//! Theme overrides flowing through the façade.

use std::fs;

use capsule::prelude::*;
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("capsule_style=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn config_override_changes_one_leaf() {
    let config = ThemeConfig::new().with(
        ThemeMode::Light,
        ButtonStatus::Primary,
        ButtonState::Default,
        DesignPatch::new().background_color("#123"),
    );

    let styled = Button::new("Go").with_theme_config(config.clone()).describe();
    assert_eq!(styled.design.background_color, "#123");
    assert_eq!(styled.design.border_color, "#000");
    assert_eq!(styled.design.content_color, "#fff");

    let untouched = Button::new("Go")
        .with_theme_config(config)
        .with_mode(ThemeMode::Dark)
        .describe();
    assert_eq!(untouched.design.background_color, "#fff");
}

#[test]
fn theme_radius_and_width_apply_unless_overridden() {
    let config = ThemeConfig::new().with(
        ThemeMode::Light,
        ButtonStatus::Secondary,
        ButtonState::Default,
        DesignPatch::new()
            .border_radius("4px")
            .border_width("3px")
            .font_weight("600"),
    );

    let button = Button::new("Go")
        .with_status(ButtonStatus::Secondary)
        .with_theme_config(config);

    let style = button.clone().style();
    assert_eq!(style.border_radius, "4px");
    assert_eq!(style.border, "3px solid #ccc");
    assert_eq!(style.font_weight, "600");

    let style = button.with_border_radius("").style();
    assert_eq!(style.border_radius, "");
}

#[test]
fn unthemed_status_falls_back_to_light_primary_default() {
    init_tracing();

    let dark_muted = Button::new("Go")
        .with_mode(ThemeMode::Dark)
        .with_status(ButtonStatus::Muted)
        .describe();
    let highlighted_error = Button::new("Go")
        .with_status(ButtonStatus::Highlighted)
        .with_state(ButtonState::Error)
        .describe();

    let expected = ThemeTable::defaults()
        .get(ThemeMode::Light, ButtonStatus::Primary, ButtonState::Default)
        .unwrap();
    assert_eq!(&dark_muted.design, expected);
    assert_eq!(&highlighted_error.design, expected);
}

#[test]
fn layered_strategy_uses_flat_theme() {
    let mut theme = ButtonTheme::empty();
    theme.colors.warning = Some("#fa0".into());

    let warning = Button::new("Go")
        .with_strategy(StyleStrategy::Layered)
        .with_status(ButtonStatus::Secondary)
        .with_state(ButtonState::Warning)
        .with_theme(theme)
        .describe();
    assert_eq!(warning.design.border_color, "#fa0");
    assert_eq!(warning.design.content_color, "var(--content-color-2)");
    assert_eq!(warning.icon_color, "var(--content-color-2)");

    let disabled = Button::new("Go")
        .with_strategy(StyleStrategy::Layered)
        .with_disabled(true)
        .style();
    assert_eq!(disabled.background_color, "transparent");
    assert_eq!(disabled.color, "var(--content-color-3)");
    assert_eq!(disabled.cursor, Cursor::NotAllowed);
    assert_eq!(disabled.pointer_events, Some(false));

    let active = Button::new("Go")
        .with_strategy(StyleStrategy::Layered)
        .with_state(ButtonState::Active)
        .describe();
    assert_eq!(active.opacity, Some(0.8));
    assert_eq!(active.icon_color, "var(--content-color-1-inverse)");
}

#[test]
fn store_snapshots_feed_buttons() {
    let store = ThemeStore::new();
    store.set_config(Some(ThemeConfig::new().with(
        ThemeMode::Dark,
        ButtonStatus::Secondary,
        ButtonState::Success,
        DesignPatch::new().content_color("#0f0"),
    )));

    let button = Button::new("Go")
        .with_mode(ThemeMode::Dark)
        .with_status(ButtonStatus::Secondary)
        .with_state(ButtonState::Success)
        .with_store(&store);

    store.set_config(None);
    assert_eq!(button.describe().design.content_color, "#0f0");
}

#[test]
fn config_file_round_trip_through_button() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(
        &path,
        "[light.primary.warning]\nbackgroundColor = \"#ff8800\"\nborderRadius = \"2px\"\n",
    )
    .unwrap();

    let config = ThemeConfig::from_file(&path).unwrap();
    let style = Button::new("Careful")
        .with_state(ButtonState::Warning)
        .with_theme_config(config)
        .style();

    assert_eq!(style.background_color, "#ff8800");
    assert_eq!(style.border, "var(--border-width-1) solid #F7674A");
    assert_eq!(style.border_radius, "2px");
}

#[test]
fn global_styles_define_host_scale() {
    let globals = GlobalStyles::new()
        .with_variable("cell-height-3", "40px")
        .with_variable("--border-width-1", "1px");

    let css = globals.to_css();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("  --cell-height-3: 40px;"));
    assert!(css.contains("  --border-width-1: 1px;"));
}
