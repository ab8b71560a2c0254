//! Remote console protocol discriminator.
//!
//! Responsibilities:
//! - Define the closed set of remote console protocols a session may target.
//! - Convert the raw `type` string read from a config file into a `Protocol`.
//!
//! Does NOT handle:
//! - Deciding what an empty `type` means for a session (see `session.rs`).
//! - Speaking any of these protocols.
//!
//! Invariants:
//! - Parsing is case-sensitive; only the canonical lowercase names are accepted.
//! - `Display` and `FromStr` are inverse for every variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remote console protocol family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Source RCON over TCP.
    #[default]
    Rcon,
    /// Plain Telnet console.
    Telnet,
    /// Web RCON over WebSocket.
    #[serde(rename = "web")]
    WebRcon,
}

/// Raw protocol string that is not part of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported protocol type '{0}' (expected one of: rcon, telnet, web)")]
pub struct UnknownProtocol(pub String);

impl Protocol {
    /// Every supported protocol, in display order.
    pub const ALL: [Protocol; 3] = [Protocol::Rcon, Protocol::Telnet, Protocol::WebRcon];

    /// Canonical config-file spelling of this protocol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Protocol::Rcon => "rcon",
            Protocol::Telnet => "telnet",
            Protocol::WebRcon => "web",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .into_iter()
            .find(|protocol| protocol.as_str() == s)
            .ok_or_else(|| UnknownProtocol(s.to_string()))
    }
}
