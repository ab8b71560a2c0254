//! Configuration loader for session files.
//!
//! Responsibilities:
//! - Load the environment-keyed session map from an explicit file or the
//!   first existing file on the search path.
//! - Provide a builder-pattern `ConfigLoader` so callers (and tests) can
//!   replace the search locations.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching the file for changes.
//!
//! Invariants / Assumptions:
//! - The per-user config directory is preferred over the working directory.
//! - Only "file not found" is recoverable during the search.

mod builder;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::ConfigError;
pub use file::read_config_file;
