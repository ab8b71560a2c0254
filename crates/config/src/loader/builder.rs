//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that locates and reads the config file.
//! - Walk the fallback candidates when no explicit path is given.
//! - Offer a load-then-validate entry point.
//!
//! Does NOT handle:
//! - Decoding file contents (delegated to file.rs and the `format` module).
//! - Platform directory lookup (delegated to the `paths` module).
//!
//! Invariants / Assumptions:
//! - An explicit path is the only path read; any failure on it is fatal.
//! - During the fallback search only a not-found read advances to the next
//!   candidate. Any other failure, including user directory resolution, stops
//!   the search even if a later candidate would have succeeded.
//! - When every candidate is absent the result is `Config::default_entry()`.
//! - The user config directory lookup is on unless `allow_user_config(false)`.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::file::read_config_file;
use crate::paths::Candidate;
use crate::types::Config;

/// Configuration loader that reads sessions from an explicit file or the
/// first existing file on the search path.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    allow_user_config: bool,
    user_config_dir: Option<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            config_path: None,
            allow_user_config: true,
            user_config_dir: None,
            working_dir: None,
        }
    }

    /// Read exactly this file instead of searching.
    ///
    /// An empty path is ignored so callers can pass an unset flag through.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.config_path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
        self
    }

    /// Enable or disable the per-user config directory lookup.
    ///
    /// When disabled, the search only looks for the default file name in the
    /// working directory.
    pub fn allow_user_config(mut self, allow: bool) -> Self {
        self.allow_user_config = allow;
        self
    }

    /// Replace the platform config directory (primarily for testing).
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Resolve the default file name against `dir` instead of the process
    /// working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn user_config_allowed(&self) -> bool {
        self.allow_user_config
    }

    /// Fallback candidates in priority order.
    ///
    /// Empty when an explicit path is set, since no search takes place.
    pub fn candidates(&self) -> Vec<Candidate> {
        if self.config_path.is_some() {
            return Vec::new();
        }

        let mut candidates = Vec::with_capacity(2);
        if self.allow_user_config {
            candidates.push(Candidate::UserConfig {
                dir: self.user_config_dir.clone(),
            });
        }
        candidates.push(Candidate::WorkingDir {
            dir: self.working_dir.clone(),
        });
        candidates
    }

    /// Every path `load()` may read, in the order it would try them.
    pub fn search_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        if let Some(path) = &self.config_path {
            return Ok(vec![path.clone()]);
        }
        self.candidates().iter().map(Candidate::resolve).collect()
    }

    /// Load the config without validating it.
    ///
    /// Use this together with [`Config::validate`] when the decoded data is
    /// needed even if validation fails.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if let Some(path) = &self.config_path {
            tracing::debug!(path = %path.display(), "Loading explicit config file");
            return read_config_file(path);
        }

        load_first_existing(&self.candidates())
    }

    /// Load the config and validate every session.
    pub fn load_validated(&self) -> Result<Config, ConfigError> {
        let config = self.load()?;
        config.validate()?;
        Ok(config)
    }
}

/// Read the first candidate that exists.
fn load_first_existing(candidates: &[Candidate]) -> Result<Config, ConfigError> {
    for candidate in candidates {
        let path = candidate.resolve()?;

        tracing::debug!(
            candidate = candidate.label(),
            path = %path.display(),
            "Trying config file"
        );

        match read_config_file(&path) {
            Ok(config) => return Ok(config),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "Config file not found, trying next location");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!("No config file found, using empty default environment");
    Ok(Config::default_entry())
}
