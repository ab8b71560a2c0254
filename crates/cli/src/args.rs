//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//! - Translate global options into a `ConfigLoader` and session overrides.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read config files (see `rcon_config::ConfigLoader`).

use clap::{Parser, Subcommand, ValueEnum};
use rcon_config::{ConfigLoader, DEFAULT_CONFIG_ENV, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rcon-cli")]
#[command(about = "Resolve remote console sessions from an rcon.yaml config file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rcon-cli session\n  rcon-cli --env staging session --show-password\n  rcon-cli --config ./servers.json list --output json\n  rcon-cli --no-user-config validate\n  rcon-cli paths\n"
)]
pub struct Cli {
    /// Path to the config file (.yaml, .yml or .json); skips the search path
    #[arg(short, long, global = true, env = "RCON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Environment to select from the config file
    #[arg(short, long, global = true, env = "RCON_ENV", default_value = DEFAULT_CONFIG_ENV)]
    pub env: String,

    /// Do not search the user configuration directory
    #[arg(long, global = true)]
    pub no_user_config: bool,

    /// Directory searched instead of the platform user configuration directory
    #[arg(long, global = true, env = "RCON_USER_CONFIG_DIR")]
    pub user_config_dir: Option<PathBuf>,

    /// Server address (host:port); overrides the config file
    #[arg(short, long, global = true, env = "RCON_ADDRESS")]
    pub address: Option<String>,

    /// Server password; overrides the config file
    #[arg(short, long, global = true, env = "RCON_PASSWORD")]
    pub password: Option<String>,

    /// Protocol type (rcon, telnet, web); overrides the config file
    #[arg(short = 'T', long = "type", global = true, env = "RCON_TYPE")]
    pub kind: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the session for the selected environment with flag overrides applied
    Session {
        /// Print the password instead of masking it
        #[arg(long)]
        show_password: bool,
    },

    /// List the environments defined in the config file
    List,

    /// Load the config file and check every environment's protocol type
    Validate,

    /// Print the config file locations searched, in priority order
    Paths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl Cli {
    /// Builds the loader described by the global options.
    ///
    /// Blank `--config` values are ignored so an empty `RCON_CONFIG` falls
    /// back to the search path.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().allow_user_config(!self.no_user_config);

        if let Some(path) = &self.config
            && !path.to_string_lossy().trim().is_empty()
        {
            loader = loader.with_config_path(path.clone());
        }

        if let Some(dir) = &self.user_config_dir {
            loader = loader.with_user_config_dir(dir.clone());
        }

        loader
    }

    /// Session values given on the command line or through the environment.
    pub fn overrides(&self) -> Session {
        Session::new(
            self.address.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
            self.kind.clone().unwrap_or_default(),
        )
    }
}
