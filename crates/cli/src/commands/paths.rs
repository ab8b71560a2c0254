//! Search path diagnostics command.

use anyhow::{Context, Result};

use crate::args::Cli;
use crate::formatters::{PathRow, format_paths};

pub fn run(cli: &Cli) -> Result<()> {
    let paths = cli
        .loader()
        .search_paths()
        .context("Failed to resolve config search paths")?;

    let rows: Vec<PathRow> = paths
        .iter()
        .map(|path| PathRow {
            path: path.display().to_string(),
            exists: path.is_file(),
        })
        .collect();

    println!("{}", format_paths(&rows, cli.output)?);
    Ok(())
}
