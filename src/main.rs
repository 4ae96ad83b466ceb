//! registry-scraper CLI entry point
//!
//! Parses the command line, runs the scrape, and renders failures with
//! details and suggestions before exiting with status 1.

use anyhow::Result;
use clap::Parser;
use registry_scraper::cli;
use registry_scraper::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
