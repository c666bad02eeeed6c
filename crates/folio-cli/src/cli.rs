//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Folio - patch CMS frontmatter into a rendered HTML page
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Patch CMS frontmatter content into a rendered HTML page", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan markdown files and print their frontmatter as JSON
    Scan(ScanArgs),
    /// Load content and apply it to a page
    Render(RenderArgs),
    /// Inspect or create the configuration file
    Config {
        /// Config action to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `folio scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Markdown files to scan
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `folio render`.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// HTML page to patch (overrides `page.input`)
    #[arg(long)]
    pub page: Option<String>,

    /// Content directory or base URL (overrides `content.location`)
    #[arg(long)]
    pub content: Option<String>,

    /// Output file (overrides `page.output`; stdout when neither is set)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print a single value by dotted key (e.g. `page.input`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Where to write (defaults to the XDG config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
