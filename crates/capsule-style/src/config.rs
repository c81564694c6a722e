//! Loading theme overrides from TOML or JSON.
//!
//! Both formats use the same camelCase keys as the in-memory types:
//!
//! ```toml
//! [light.primary.default]
//! backgroundColor = "#123"
//!
//! [dark.secondary.warning]
//! color = "#F7674A"
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::derive::ButtonTheme;
use crate::theme::ThemeConfig;
use crate::{Error, Result};

/// Document format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

fn parse_as<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
        ConfigFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

fn read_as<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let format = ConfigFormat::from_path(path);
    let value = parse_as(&content, format).inspect_err(|e| {
        tracing::warn!("Theme config {} rejected: {}", path.display(), e);
    })?;
    tracing::info!("Loaded theme config: {}", path.display());
    Ok(value)
}

impl ThemeConfig {
    /// Parse an override table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_as(content, ConfigFormat::Toml)
    }

    /// Parse an override table from JSON text. `null` branches are skipped.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_as(content, ConfigFormat::Json)
    }

    /// Load an override table from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_as(path.as_ref())
    }
}

impl ButtonTheme {
    /// Parse a flat theme from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_as(content, ConfigFormat::Toml)
    }

    /// Parse a flat theme from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_as(content, ConfigFormat::Json)
    }

    /// Load a flat theme from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_as(path.as_ref())
    }
}
