//! # folio-cli
//!
//! Command-line front end for Folio.
//!
//! - `folio scan <files>`: print scanned frontmatter as JSON
//! - `folio render`: load every section and patch it into a page
//! - `folio config path|show|get|init`: inspect or create the config file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::FolioConfig;

/// Run a parsed command line.
pub async fn run(cli: Cli) -> folio_core::Result<()> {
    match cli.command {
        Command::Scan(args) => commands::cmd_scan(&args),
        Command::Render(args) => {
            let config = FolioConfig::load(cli.config.as_deref())?;
            commands::cmd_render(&config, &args).await
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action)
        }
    }
}
