//! Command-line interface for the registry scraper.
//!
//! The binary scrapes one provider documentation tree per invocation:
//!
//! ```bash
//! registry-scraper -n hashicorp/terraform-provider-azurerm \
//!     -r website/docs/r -o provider-metadata.yaml
//! ```
//!
//! # Configuration Sources
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`crate::constants`])
//! 2. A TOML file given with `--config`
//! 3. `REGISTRY_SCRAPER_*` environment variables
//! 4. Command-line flags
//!
//! Environment variables and flags are the same clap arguments, so a flag
//! always wins over its variable.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress everything except errors (including the summary line)
//!
//! `RUST_LOG` overrides both when set.

mod logging;

pub use logging::{initialize_logging, level_for};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::ScrapeConfig;
use crate::metadata::ProviderScraper;

/// Scrape Terraform registry documentation into provider resource metadata.
#[derive(Parser, Debug)]
#[command(
    name = "registry-scraper",
    about = "Scrape Terraform registry documentation into provider resource metadata",
    version,
    author,
    long_about = "Walks a provider's registry documentation, extracts resource titles, categories, \
                  argument documentation, import statements, and example configurations, and writes \
                  them as a single YAML metadata document."
)]
pub struct Cli {
    /// TOML configuration file; flags override its values.
    #[arg(long, env = "REGISTRY_SCRAPER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output for debugging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long)]
    quiet: bool,

    /// Provider identifier written to the metadata document.
    #[arg(short = 'n', long, env = "REGISTRY_SCRAPER_PROVIDER_NAME", value_name = "NAME")]
    provider_name: Option<String>,

    /// Root directory of the provider documentation.
    #[arg(short = 'r', long, env = "REGISTRY_SCRAPER_REPO_PATH", value_name = "DIR")]
    repo_path: Option<PathBuf>,

    /// Output path of the metadata document.
    #[arg(short, long, env = "REGISTRY_SCRAPER_OUTPUT", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log and skip example snippets that are not valid HCL.
    #[arg(long, env = "REGISTRY_SCRAPER_SKIP_EXAMPLE_ERRORS")]
    skip_example_errors: bool,

    /// Do not extract attribute references from examples.
    #[arg(long, env = "REGISTRY_SCRAPER_SKIP_EXAMPLE_REFERENCES")]
    skip_example_references: bool,

    /// Extension of documentation files.
    #[arg(long, env = "REGISTRY_SCRAPER_EXTENSION", value_name = "EXT")]
    extension: Option<String>,

    /// Maximum number of documents scraped concurrently (default: CPU count).
    #[arg(long, env = "REGISTRY_SCRAPER_MAX_PARALLEL", value_name = "N")]
    max_parallel: Option<usize>,

    /// Selector for example code.
    #[arg(long, env = "REGISTRY_SCRAPER_CODE_QUERY", value_name = "QUERY")]
    code_query: Option<String>,

    /// Selector for prelude candidates.
    #[arg(long, env = "REGISTRY_SCRAPER_PRELUDE_QUERY", value_name = "QUERY")]
    prelude_query: Option<String>,

    /// Selector for argument anchors.
    #[arg(long, env = "REGISTRY_SCRAPER_FIELD_DOC_QUERY", value_name = "QUERY")]
    field_doc_query: Option<String>,

    /// Selector for import statements.
    #[arg(long, env = "REGISTRY_SCRAPER_IMPORT_QUERY", value_name = "QUERY")]
    import_query: Option<String>,
}

impl Cli {
    /// Run the scrape described by the arguments.
    ///
    /// Installs logging, builds the configuration, scrapes the repository,
    /// and writes the metadata document.
    pub async fn execute(self) -> Result<()> {
        initialize_logging(self.verbose, self.quiet);

        let config = self.scrape_config()?;
        let output = config.output.clone();
        let scraper = ProviderScraper::new(config)?;

        let metadata = scraper.scrape().await?;
        metadata.store(&output)?;

        if !self.quiet {
            println!(
                "{}",
                format!(
                    "Scraped {} resources for {} into {}",
                    metadata.resources.len(),
                    metadata.name,
                    output.display()
                )
                .green()
            );
        }
        Ok(())
    }

    /// Merge the configuration file (if any) with the command-line values.
    pub fn scrape_config(&self) -> Result<ScrapeConfig> {
        let mut config = match &self.config {
            Some(path) => ScrapeConfig::load(path)?,
            None => ScrapeConfig::default(),
        };

        if let Some(provider_name) = &self.provider_name {
            config.provider_name.clone_from(provider_name);
        }
        if let Some(repo_path) = &self.repo_path {
            config.repo_path.clone_from(repo_path);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(extension) = &self.extension {
            config.extension.clone_from(extension);
        }
        if let Some(max_parallel) = self.max_parallel {
            config.max_parallel = max_parallel;
        }
        config.skip_example_errors |= self.skip_example_errors;
        config.skip_example_references |= self.skip_example_references;

        let queries = &mut config.queries;
        for (value, target) in [
            (&self.code_query, &mut queries.code),
            (&self.prelude_query, &mut queries.prelude),
            (&self.field_doc_query, &mut queries.field_doc),
            (&self.import_query, &mut queries.import),
        ] {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        Ok(config)
    }
}
