//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use rcon_config::ConfigError;

/// Structured exit codes for rcon-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - explicit config file or environment does not exist.
    ///
    /// Scripts should check the `--config` path or the `--env` name.
    NotFound = 4,

    /// Validation error - unreadable content, unsupported extension or protocol type.
    ///
    /// Scripts should fix the config file and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Read { .. } if err.is_not_found() => ExitCode::NotFound,
            ConfigError::EnvironmentNotFound(_) => ExitCode::NotFound,

            ConfigError::Parse { .. }
            | ConfigError::UnsupportedExtension { .. }
            | ConfigError::ConfigNotSet
            | ConfigError::UnsupportedProtocol { .. } => ExitCode::ValidationError,

            ConfigError::Read { .. }
            | ConfigError::ConfigDirUnavailable(_)
            | ConfigError::MissingAddress { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
