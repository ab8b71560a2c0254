//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the per-user configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//! - Describe the ordered fallback candidates consulted when no explicit
//!   path is given.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Deciding which failures end the search (see `loader` module).
//!
//! Invariants:
//! - Candidates are resolved lazily, one at a time, in priority order.
//! - The user configuration directory is never created here.

use std::path::PathBuf;

use crate::constants::{APP_NAMESPACE, DEFAULT_CONFIG_NAME};
use crate::loader::ConfigError;

/// Returns the per-user path to the configuration file.
///
/// - Linux: `$XDG_CONFIG_HOME/rcon-cli/rcon.yaml` (`~/.config/rcon-cli/rcon.yaml`)
/// - macOS: `~/Library/Application Support/rcon-cli/rcon.yaml`
/// - Windows: `%AppData%\rcon-cli\config\rcon.yaml`
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAMESPACE).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable(
            "no valid home directory could be found for the current user".to_string(),
        )
    })?;

    Ok(proj_dirs.config_dir().join(DEFAULT_CONFIG_NAME))
}

/// One location consulted by the fallback search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// The default file name inside the per-user configuration directory.
    ///
    /// `dir` replaces the platform directory when set.
    UserConfig { dir: Option<PathBuf> },
    /// The default file name relative to the working directory.
    ///
    /// `dir` replaces the process working directory when set.
    WorkingDir { dir: Option<PathBuf> },
}

impl Candidate {
    /// Resolves this candidate to a concrete file path.
    ///
    /// Only `UserConfig` without an override directory can fail, when the
    /// platform has no resolvable configuration directory.
    pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
        match self {
            Candidate::UserConfig { dir: Some(dir) } => Ok(dir.join(DEFAULT_CONFIG_NAME)),
            Candidate::UserConfig { dir: None } => user_config_path(),
            Candidate::WorkingDir { dir: Some(dir) } => Ok(dir.join(DEFAULT_CONFIG_NAME)),
            Candidate::WorkingDir { dir: None } => Ok(PathBuf::from(DEFAULT_CONFIG_NAME)),
        }
    }

    /// Short name used in logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Candidate::UserConfig { .. } => "user config",
            Candidate::WorkingDir { .. } => "working directory",
        }
    }
}
