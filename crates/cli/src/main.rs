//! rcon-cli - Resolve remote console sessions from a config file.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr so stdout stays machine-readable.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Config file discovery or decoding (see `crates/config`).
//! - Speaking any remote console protocol.
//!
//! Invariants:
//! - Flag values override config file values for the selected environment.
//! - Passwords are masked in output unless `--show-password` is given.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_command(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}
