//! Config file formats.
//!
//! Responsibilities:
//! - Select a decoder from a file name's extension.
//! - Decode YAML and JSON documents into the same `Config` shape.
//! - Encode a `Config` for display (never written back to disk by this crate).
//!
//! Does NOT handle:
//! - Reading files (see `loader` module).
//! - Validating decoded sessions (see `types::Config::validate`).
//!
//! Invariants:
//! - Extension matching is case-sensitive: `.yml`, `.yaml`, `.json` only.
//! - Equivalent YAML and JSON inputs decode to equal `Config` values.
//! - A YAML document holding only whitespace or comments decodes to an empty
//!   `Config`; an empty JSON document is a decode error.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::loader::ConfigError;
use crate::types::Config;

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// Decoder or encoder failure for a specific format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the extension of the last path element, including the leading dot.
///
/// `rcon.yaml` yields `.yaml`, `.yaml` yields `.yaml`, `rcon` yields an empty string.
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(index) => name[index..].to_string(),
        None => String::new(),
    }
}

impl Format {
    /// Selects the format for `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = extension_of(path);
        Self::from_extension(&extension).ok_or_else(|| ConfigError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension,
        })
    }

    /// Maps a dotted extension (such as `.yaml`) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".yml" | ".yaml" => Some(Format::Yaml),
            ".json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Decodes a document in this format.
    pub fn decode(self, content: &[u8]) -> Result<Config, FormatError> {
        match self {
            Format::Yaml => {
                if is_blank_yaml(content) {
                    return Ok(Config::new());
                }
                Ok(serde_yaml::from_slice(content)?)
            }
            Format::Json => Ok(serde_json::from_slice(content)?),
        }
    }

    /// Encodes a config in this format.
    pub fn encode(self, config: &Config) -> Result<String, FormatError> {
        match self {
            Format::Yaml => Ok(serde_yaml::to_string(config)?),
            Format::Json => Ok(serde_json::to_string_pretty(config)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}

fn is_blank_yaml(content: &[u8]) -> bool {
    String::from_utf8_lossy(content).lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
