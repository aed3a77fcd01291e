//! # shopfront-cli
//!
//! Command-line front end for `shopfront-core`.
//!
//! ```text
//! shopfront [-v] [-c shopfront.toml] catalog
//! shopfront quote    -i p1=2 -i p3
//! shopfront checkout -e a@b.com -i p1=2
//! ```
//!
//! Every command prints a pretty JSON report on stdout. Logs go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::ShopConfig;
use crate::error::{CliError, CliResult};

/// Runs a parsed command line and returns the JSON to print.
pub fn run(cli: Cli) -> CliResult<String> {
    let config = ShopConfig::load(cli.config.as_deref())?;
    execute(&config, &cli.command)
}

/// Runs `command` against an already-loaded configuration.
pub fn execute(config: &ShopConfig, command: &Command) -> CliResult<String> {
    let output = match command {
        Command::Catalog => serde_json::to_string_pretty(&commands::catalog(config)?)?,
        Command::Quote { items } => serde_json::to_string_pretty(&commands::quote(config, items)?)?,
        Command::Checkout { email, items } => {
            serde_json::to_string_pretty(&commands::checkout(config, email, items)?)?
        }
    };
    Ok(output)
}

/// The one stderr line printed for a failed command.
///
/// The error itself is only logged at debug level so the default filter
/// does not report it a second time.
pub fn failure_message(err: &CliError) -> String {
    format!("Error: {}", err)
}

/// Default log filter for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,shopfront_core=info,shopfront_cli=info",
        1 => "info,shopfront_core=debug,shopfront_cli=debug",
        _ => "trace",
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise the level follows `-v` (see [`default_filter`])
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .init();
}
