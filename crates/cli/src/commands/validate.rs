//! Config validation command.

use anyhow::{Context, Result};

use crate::args::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.loader().load().context("Failed to load config")?;
    config.validate()?;

    println!("Config OK: {} environment(s)", config.len());
    Ok(())
}
