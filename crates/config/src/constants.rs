//! Centralized constants for the rcon workspace.
//!
//! File names and lookup keys shared by the loader and the CLI live here so
//! the search path and the fallback environment stay in one place.

// =============================================================================
// File Lookup
// =============================================================================

/// Default config file name.
///
/// Used both as the working-directory fallback and as the file name searched
/// for inside the per-user configuration directory.
pub const DEFAULT_CONFIG_NAME: &str = "rcon.yaml";

/// Application namespace inside the platform configuration directory.
///
/// - Linux: `$XDG_CONFIG_HOME/rcon-cli/rcon.yaml`
/// - macOS: `~/Library/Application Support/rcon-cli/rcon.yaml`
/// - Windows: `%AppData%\rcon-cli\config\rcon.yaml`
pub const APP_NAMESPACE: &str = "rcon-cli";

// =============================================================================
// Environments
// =============================================================================

/// Environment taken when the caller does not select another one.
///
/// This is also the key of the single empty entry synthesized when no config
/// file exists anywhere on the search path.
pub const DEFAULT_CONFIG_ENV: &str = "default";
