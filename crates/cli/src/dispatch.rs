//! Command dispatch.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its implementation.
//!
//! Does NOT handle:
//! - Logging setup or exit codes (see `main`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

pub fn run_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Session { show_password } => commands::session::run(cli, *show_password),
        Commands::List => commands::list::run(cli),
        Commands::Validate => commands::validate::run(cli),
        Commands::Paths => commands::paths::run(cli),
    }
}
