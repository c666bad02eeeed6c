//! Folio CLI
//!
//! Patches CMS frontmatter content into a rendered HTML page.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::{Cli, logging, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    run(cli).await?;
    Ok(())
}
