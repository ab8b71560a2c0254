//! Single config file reading.
//!
//! Responsibilities:
//! - Read one config file from disk and decode it with the format selected
//!   by its extension.
//!
//! Does NOT handle:
//! - Choosing which file to read (see builder.rs).
//! - Validation of decoded sessions.
//!
//! Invariants:
//! - The file is read in full and closed before decoding starts.
//! - The read happens before the extension check, so an absent file is
//!   always reported as a read failure.
//! - Every error carries the path that was attempted.

use std::path::Path;

use super::error::ConfigError;
use crate::format::Format;
use crate::types::Config;

/// Reads and decodes the config file at `path`.
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let format = Format::from_path(path)?;

    let config = format
        .decode(&content)
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        environments = config.len(),
        "Loaded config file"
    );

    Ok(config)
}
