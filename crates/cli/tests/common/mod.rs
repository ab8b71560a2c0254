//! Shared test utilities for rcon-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Redirect the user config directory and the working directory into
//!   temporary directories so the host's `rcon.yaml` files are never read.
//!
//! Invariants / Assumptions:
//! - `RCON_*` variables from the host are cleared for every command.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns an `rcon-cli` command with host `RCON_*` variables cleared.
pub fn rcon_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rcon-cli");

    cmd.env_remove("RCON_CONFIG")
        .env_remove("RCON_ENV")
        .env_remove("RCON_USER_CONFIG_DIR")
        .env_remove("RCON_ADDRESS")
        .env_remove("RCON_PASSWORD")
        .env_remove("RCON_TYPE")
        .env_remove("RUST_LOG");

    cmd
}

/// A pair of isolated search locations.
pub struct Sandbox {
    pub user_dir: TempDir,
    pub work_dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            user_dir: TempDir::new().unwrap(),
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// A hermetic command that searches only this sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = rcon_cmd();
        cmd.env("RCON_USER_CONFIG_DIR", self.user_dir.path())
            .current_dir(self.work_dir.path());
        cmd
    }

    /// Writes a file into the user config directory.
    #[allow(dead_code)]
    pub fn write_user(&self, name: &str, content: &str) -> PathBuf {
        write(self.user_dir.path(), name, content)
    }

    /// Writes a file into the working directory.
    #[allow(dead_code)]
    pub fn write_local(&self, name: &str, content: &str) -> PathBuf {
        write(self.work_dir.path(), name, content)
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
