use serde::{Deserialize, Serialize};

/// Mouse cursor shown over a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    /// Default arrow cursor.
    Default,
    /// Pointing hand cursor (for clickable elements).
    #[default]
    Pointer,
    /// Not-allowed cursor (prohibition sign).
    NotAllowed,
}

impl Cursor {
    /// CSS keyword for this cursor.
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        }
    }
}
