//! Environment listing command.
//!
//! Lists environments without validating them, so a config with an unknown
//! protocol type can still be inspected.

use anyhow::{Context, Result};

use crate::args::Cli;
use crate::formatters::{EnvironmentRow, format_environments, mask_password};

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.loader().load().context("Failed to load config")?;

    let rows: Vec<EnvironmentRow> = config
        .iter()
        .map(|(name, session)| EnvironmentRow {
            environment: name.to_string(),
            address: session.address.clone(),
            kind: session.kind.clone(),
            password: mask_password(&session.password, false),
        })
        .collect();

    println!("{}", format_environments(&rows, cli.output)?);
    Ok(())
}
