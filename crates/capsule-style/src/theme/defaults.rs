//! Built-in theme table.

use std::sync::LazyLock;

use super::{DesignValues, ThemeTable};
use crate::types::{ButtonState, ButtonStatus, ThemeMode};

const ATTENTION: &str = "#00A2FF";
const SUCCESS: &str = "#24BC66";
const WARNING: &str = "#F7674A";

static DEFAULT_THEME_TABLE: LazyLock<ThemeTable> = LazyLock::new(build_default_table);

impl ThemeTable {
    /// The shipped default table.
    ///
    /// Covers light and dark modes for the primary and secondary statuses,
    /// each with default, disabled, attention, success and warning states.
    /// Built once and shared for the lifetime of the process.
    pub fn defaults() -> &'static ThemeTable {
        &DEFAULT_THEME_TABLE
    }
}

fn build_default_table() -> ThemeTable {
    use ButtonState::{Attention, Default, Disabled, Success, Warning};
    use ButtonStatus::{Primary, Secondary};
    use ThemeMode::{Dark, Light};

    let rows: [(ThemeMode, ButtonStatus, ButtonState, [&str; 3]); 20] = [
        // Light / primary: filled
        (Light, Primary, Default, ["#000", "#000", "#fff"]),
        (Light, Primary, Disabled, ["#e3e3e3", "#ccc", "#888"]),
        (Light, Primary, Attention, [ATTENTION, ATTENTION, "#fff"]),
        (Light, Primary, Success, [SUCCESS, SUCCESS, "#fff"]),
        (Light, Primary, Warning, [WARNING, WARNING, "#fff"]),
        // Light / secondary: outlined
        (Light, Secondary, Default, ["transparent", "#ccc", "#000"]),
        (Light, Secondary, Disabled, ["transparent", "#ccc", "#888"]),
        (Light, Secondary, Attention, ["transparent", ATTENTION, ATTENTION]),
        (Light, Secondary, Success, ["transparent", SUCCESS, SUCCESS]),
        (Light, Secondary, Warning, ["transparent", WARNING, WARNING]),
        // Dark / primary
        (Dark, Primary, Default, ["#fff", "#fff", "#000"]),
        (Dark, Primary, Disabled, ["#333", "#555", "#888"]),
        (Dark, Primary, Attention, [ATTENTION, ATTENTION, "#fff"]),
        (Dark, Primary, Success, [SUCCESS, SUCCESS, "#fff"]),
        (Dark, Primary, Warning, [WARNING, WARNING, "#fff"]),
        // Dark / secondary
        (Dark, Secondary, Default, ["transparent", "rgba(255,255,255,0.25)", "#fff"]),
        (Dark, Secondary, Disabled, ["transparent", "#333", "#888"]),
        (Dark, Secondary, Attention, ["transparent", ATTENTION, ATTENTION]),
        (Dark, Secondary, Success, ["transparent", SUCCESS, SUCCESS]),
        (Dark, Secondary, Warning, ["transparent", WARNING, WARNING]),
    ];

    rows.into_iter()
        .fold(ThemeTable::new(), |table, (mode, status, state, [bg, border, fg])| {
            table.with(mode, status, state, DesignValues::new(bg, border, fg))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateVocabulary;

    #[test]
    fn defaults_cover_full_matrix() {
        let table = ThemeTable::defaults();

        for mode in ThemeMode::ALL {
            for status in [ButtonStatus::Primary, ButtonStatus::Secondary] {
                for state in StateVocabulary::Themed.members() {
                    assert!(
                        table.get(*mode, status, *state).is_some(),
                        "missing {mode}/{status}/{state}"
                    );
                }
            }
        }
        assert_eq!(table.len(), 20);
    }

    #[test]
    fn defaults_are_shared() {
        assert!(std::ptr::eq(ThemeTable::defaults(), ThemeTable::defaults()));
    }

    #[test]
    fn light_primary_default_is_black_pill() {
        let values = ThemeTable::defaults()
            .get(ThemeMode::Light, ButtonStatus::Primary, ButtonState::Default)
            .unwrap();
        assert_eq!(values, &DesignValues::new("#000", "#000", "#fff"));
    }
}
