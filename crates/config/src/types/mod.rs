//! Configuration type definitions for rcon sessions.
//!
//! Responsibilities:
//! - Define the environment-keyed `Config` map and its `Session` values.
//! - Define the closed `Protocol` set and its validated string conversion.
//!
//! Does NOT handle:
//! - Configuration loading from files (see `loader` module).
//! - Format detection and decoding (see `format` module).
//! - Actual network connections (the consuming CLI's protocol clients).
//!
//! Invariants:
//! - Field names on disk are lowercase: `address`, `password`, `type`.
//! - `Session` keeps the raw `type` string; `Protocol` is derived on demand.

mod config;
mod protocol;
mod session;

pub use config::{Config, validate};
pub use protocol::{Protocol, UnknownProtocol};
pub use session::Session;
