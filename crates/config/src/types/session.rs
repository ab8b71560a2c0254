//! Session credential type.
//!
//! Responsibilities:
//! - Define `Session`, one named set of remote console credentials.
//! - Resolve the raw `type` field into a `Protocol`.
//! - Layer command-line overrides on top of file values.
//!
//! Does NOT handle:
//! - Validating a whole config (see `config.rs`).
//! - Loading sessions from disk (see `loader` module).
//!
//! Invariants:
//! - Every field is optional on disk; a missing field is an empty string.
//! - `kind` keeps the raw string so an unknown protocol survives decoding and
//!   is reported by validation with the environment that holds it.
//! - `Debug` output never contains the password.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::protocol::{Protocol, UnknownProtocol};
use crate::loader::ConfigError;

/// Connection settings for one environment.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Remote console address in `host:port` form.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Remote console password, stored in plain text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Raw protocol discriminator. Empty means the default protocol.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl Session {
    /// Creates a session from its three raw fields.
    pub fn new(
        address: impl Into<String>,
        password: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            password: password.into(),
            kind: kind.into(),
        }
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.password.is_empty() && self.kind.is_empty()
    }

    /// Resolves the protocol this session targets.
    ///
    /// An empty `type` selects [`Protocol::default`].
    pub fn protocol(&self) -> Result<Protocol, UnknownProtocol> {
        if self.kind.is_empty() {
            return Ok(Protocol::default());
        }
        self.kind.parse()
    }

    /// Returns a copy of this session with every non-empty field of
    /// `overrides` replacing the corresponding field.
    ///
    /// Values given on the command line take precedence over the file.
    pub fn overlay(mut self, overrides: Session) -> Self {
        if !overrides.address.is_empty() {
            self.address = overrides.address;
        }
        if !overrides.password.is_empty() {
            self.password = overrides.password;
        }
        if !overrides.kind.is_empty() {
            self.kind = overrides.kind;
        }
        self
    }

    /// Returns the address, failing when none was configured.
    ///
    /// `environment` names the session in the error message.
    pub fn require_address(&self, environment: &str) -> Result<&str, ConfigError> {
        if self.address.is_empty() {
            return Err(ConfigError::MissingAddress {
                environment: environment.to_string(),
            });
        }
        Ok(&self.address)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("password", &password)
            .field("kind", &self.kind)
            .finish()
    }
}
