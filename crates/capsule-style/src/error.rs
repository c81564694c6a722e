//! Error types for theme configuration loading.
//!
//! Resolution itself never fails; only reading overrides from disk or text
//! can produce an [`Error`].

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML document could not be deserialized.
    #[error("Invalid TOML theme config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON document could not be deserialized.
    #[error("Invalid JSON theme config: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("Failed to read theme config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A textual token did not name a known enumeration member.
    #[error("Unknown {kind} '{token}'")]
    UnknownToken { kind: &'static str, token: String },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-token error.
    pub fn unknown_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind,
            token: token.into(),
        }
    }
}
