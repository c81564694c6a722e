//! Theme overrides: table config, layered themes and a shared store.
//!
//! Run with: cargo run -p capsule --example theming

use capsule::prelude::*;

const BRAND_THEME: &str = r##"
[light.primary.default]
backgroundColor = "#6366f1"
borderColor = "#6366f1"

[dark.primary.default]
backgroundColor = "#818cf8"
color = "#1e1b4b"
"##;

fn main() -> Result<(), capsule::style::Error> {
    tracing_subscriber::fmt()
        .with_env_filter("capsule_style=debug")
        .init();

    let store = ThemeStore::new();
    store.set_config(Some(ThemeConfig::from_toml_str(BRAND_THEME)?));

    for mode in ThemeMode::ALL {
        let style = Button::new("Brand").with_mode(*mode).with_store(&store).style();
        println!("{mode}:\n{style}");
    }

    let mut flat = ButtonTheme::empty();
    flat.colors.success = Some("#10b981".into());
    let layered = Button::new("Saved")
        .with_strategy(StyleStrategy::Layered)
        .with_status(ButtonStatus::Secondary)
        .with_state(ButtonState::Success)
        .with_theme(flat)
        .style();
    println!("layered success:\n{layered}");

    let collapsed = Button::unlabeled()
        .with_icon("x")
        .with_aria_label("Close")
        .with_slot_layout(SlotLayout::Collapsed)
        .render();
    println!("icon-only slots: {}", collapsed.icon_slots().count());

    Ok(())
}
