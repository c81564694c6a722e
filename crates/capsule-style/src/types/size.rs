//! Discrete size scale.

use serde::{Deserialize, Serialize};

/// Button size on the 1-4 scale (smallest to largest).
///
/// The index selects the host's `--cell-height-N` custom property.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ButtonSize {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
    Four = 4,
}

impl ButtonSize {
    /// All sizes, smallest first.
    pub const ALL: [ButtonSize; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Scale index (1-4).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a size by scale index.
    pub fn from_index(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }
}

impl TryFrom<u8> for ButtonSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value.into()).ok_or_else(|| format!("button size {value} is not in 1..=4"))
    }
}

impl From<ButtonSize> for u8 {
    fn from(size: ButtonSize) -> Self {
        size.index()
    }
}

impl std::fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Check whether `value` is on the size scale.
pub fn is_valid_size(value: i64) -> bool {
    ButtonSize::from_index(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_bounds() {
        assert!(is_valid_size(1));
        assert!(is_valid_size(2));
        assert!(is_valid_size(4));
        assert!(!is_valid_size(0));
        assert!(!is_valid_size(5));
        assert!(!is_valid_size(-3));
    }

    #[test]
    fn size_index_roundtrip() {
        for size in ButtonSize::ALL {
            assert_eq!(ButtonSize::from_index(size.index().into()), Some(size));
        }
        assert_eq!(ButtonSize::default(), ButtonSize::Three);
    }

    #[test]
    fn size_rejects_out_of_range_on_deserialize() {
        let ok: ButtonSize = serde_json::from_str("2").unwrap();
        assert_eq!(ok, ButtonSize::Two);
        assert!(serde_json::from_str::<ButtonSize>("7").is_err());
    }
}
