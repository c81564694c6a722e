//! Enumerations for the button style axes and their validity predicates.
//!
//! Each axis is a closed set of lowercase tokens. The enums parse from and
//! serialize to those tokens; the `is_valid_*` predicates test untyped input
//! against the same sets and never fail.

/// Implements `as_str`, `Display`, `FromStr` and string serde for a token enum.
///
/// Tokens go through plain strings so they also work as TOML and JSON map keys.
macro_rules! token_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $ty {
            /// All members, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The lowercase token for this member.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $token),+
                }
            }

            /// Look up a member by token.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                Self::from_token(s).ok_or_else(|| crate::Error::unknown_token($kind, s))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_token(&token).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown {} '{}'", $kind, token))
                })
            }
        }
    };
}

mod cursor;
mod mode;
mod position;
mod size;
mod state;
mod status;

pub use cursor::Cursor;
pub use mode::ThemeMode;
pub use position::IconPosition;
pub use size::{ButtonSize, is_valid_size};
pub use state::{ButtonState, StateVocabulary, is_valid_state};
pub use status::{ButtonStatus, is_valid_status};
