//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test explicit-path loading and its fatal error handling.
//! - Test the fallback search order and the not-found asymmetry.
//! - Test load-then-validate behavior.
//!
//! Invariants:
//! - Tests never read the real user config directory or the process working
//!   directory; every location is redirected into a `tempfile::TempDir`.

use std::path::{Path, PathBuf};

use crate::loader::builder::ConfigLoader;


/// Writes `content` to `dir/name` and returns the full path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A loader whose search locations are both redirected into temp directories.
pub fn isolated_loader(user_dir: &Path, working_dir: &Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_user_config_dir(user_dir)
        .with_working_dir(working_dir)
}
