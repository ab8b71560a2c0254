//! CLI command implementations.

pub mod list;
pub mod paths;
pub mod session;
pub mod validate;
