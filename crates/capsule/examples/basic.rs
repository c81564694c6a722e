//! Basic buttons: sizes, statuses, icons and the disabled state.
//!
//! Run with: cargo run -p capsule --example basic

use capsule::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("capsule=trace,capsule_style=debug")
        .init();

    println!("{}", GlobalStyles::new().with_variable("cell-height-3", "40px"));

    for size in ButtonSize::ALL {
        let element = Button::new(format!("Size {size}")).with_size(size).render();
        println!("size {size}:\n{}", element.style);
    }

    for status in ButtonStatus::ALL {
        let descriptor = Button::new(status.as_str()).with_status(*status).describe();
        println!("{status}: {:?}", descriptor.design);
    }

    let with_icon = Button::new("Search")
        .with_icon("search")
        .with_icon_position(IconPosition::Left)
        .on_click(|| println!("search clicked"))
        .render();
    with_icon.click();
    for slot in with_icon.icon_slots() {
        println!("{:?} slot: {:?}", slot.position, slot.output);
    }

    let disabled = Button::new("Unavailable")
        .with_disabled(true)
        .on_click(|| println!("never printed"))
        .render();
    println!("disabled clicked: {}", disabled.click());
}
