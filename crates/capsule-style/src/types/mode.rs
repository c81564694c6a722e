//! Light/dark appearance axis.

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

token_enum!(ThemeMode, "mode", {
    Light => "light",
    Dark => "dark",
});
