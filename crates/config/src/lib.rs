//! Session configuration for rcon command-line tools.
//!
//! This crate loads remote console credentials (address, password, protocol)
//! keyed by environment name from a YAML or JSON file, so they do not have
//! to be passed as flags on every invocation.

pub mod constants;
pub mod format;
mod loader;
pub mod paths;
pub mod types;

pub use constants::{APP_NAMESPACE, DEFAULT_CONFIG_ENV, DEFAULT_CONFIG_NAME};
pub use format::{Format, FormatError};
pub use loader::{ConfigError, ConfigLoader, read_config_file};
pub use types::{Config, Protocol, Session, UnknownProtocol, validate};
