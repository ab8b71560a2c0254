//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration loading and validation failure.
//! - Classify errors into the categories callers branch on (not found,
//!   validation, unsupported extension).
//!
//! Does NOT handle:
//! - Decoder-specific error details (see `format.rs`).
//!
//! Invariants:
//! - Every variant carries the context needed for an actionable message:
//!   the file path, the offending extension, or the environment name.
//! - Passwords never appear in error messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;
use crate::types::UnknownProtocol;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Unsupported file extension '{extension}' for config file at {path} (expected .yml, .yaml or .json)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config validation error: config is not set")]
    ConfigNotSet,

    #[error("Config validation error: unsupported type in '{environment}' environment")]
    UnsupportedProtocol {
        environment: String,
        #[source]
        source: UnknownProtocol,
    },

    #[error("Environment '{0}' not found in config file")]
    EnvironmentNotFound(String),

    #[error("Address is not set for '{environment}' environment. Pass --address or add it to the config file.")]
    MissingAddress { environment: String },
}

impl ConfigError {
    /// Returns true when the underlying read failed because the file does not exist.
    ///
    /// This is the only failure the fallback search recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == ErrorKind::NotFound)
    }

    /// Returns true for errors raised while validating an already decoded config.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigNotSet | ConfigError::UnsupportedProtocol { .. }
        )
    }

    /// Returns true when the file name's extension is not a decodable format.
    pub fn is_unsupported_extension(&self) -> bool {
        matches!(self, ConfigError::UnsupportedExtension { .. })
    }
}
