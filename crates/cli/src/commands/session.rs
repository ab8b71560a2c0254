//! Session resolution command.
//!
//! Responsibilities:
//! - Select one environment from the validated config.
//! - Layer command-line overrides on top of the file values.
//! - Fail with a clear error when no address is available.
//!
//! Does NOT handle:
//! - Connecting to the server.

use anyhow::{Context, Result};
use rcon_config::{Config, ConfigError, Session};

use crate::args::Cli;
use crate::formatters::{SessionView, format_session, mask_password};

pub fn run(cli: &Cli, show_password: bool) -> Result<()> {
    let config = cli
        .loader()
        .load_validated()
        .context("Failed to load config")?;

    let view = resolve(&config, &cli.env, cli.overrides())?;
    let view = SessionView {
        password: mask_password(&view.password, show_password),
        ..view
    };

    println!("{}", format_session(&view, cli.output)?);
    Ok(())
}

/// Resolves the session for `environment`.
///
/// An environment missing from the config is only an error when the
/// overrides do not provide an address of their own.
pub fn resolve(config: &Config, environment: &str, overrides: Session) -> Result<SessionView> {
    let base = match config.get(environment) {
        Some(session) => session.clone(),
        None if !overrides.address.is_empty() => Session::default(),
        None => return Err(ConfigError::EnvironmentNotFound(environment.to_string()).into()),
    };

    let session = base.overlay(overrides);
    let address = session.require_address(environment)?.to_string();
    let protocol = session
        .protocol()
        .map_err(|source| ConfigError::UnsupportedProtocol {
            environment: environment.to_string(),
            source,
        })?;

    tracing::debug!(environment, %protocol, "Resolved session");

    Ok(SessionView {
        environment: environment.to_string(),
        address,
        protocol: protocol.to_string(),
        password: session.password,
    })
}
