/// Which side of the label an icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

token_enum!(IconPosition, "icon position", {
    Left => "left",
    Right => "right",
});
