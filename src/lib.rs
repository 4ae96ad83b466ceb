//! registry-scraper - Terraform registry documentation to provider metadata
//!
//! Walks the Markdown documentation of a Terraform provider and produces one
//! YAML document describing every resource: title and resolved name,
//! category, description, per-argument documentation, import statements, and
//! example configurations (as JSON manifests, with the attribute references
//! and dependency blocks of each example).
//!
//! # Architecture Overview
//!
//! Each page goes through the same pipeline:
//!
//! 1. Markdown is rendered to HTML and parsed into a tree ([`markdown`])
//! 2. Four CSS queries select the prelude, argument anchors, import
//!    statements, and example code ([`config::QueryConfig`])
//! 3. The prelude is parsed into title, description, and category
//! 4. Argument docs are collected by walking the siblings of each anchor
//! 5. Example snippets are parsed as HCL and matched to the resource, with a
//!    relaxed suffix-matching fallback when the title does not match any
//!    block exactly
//!
//! Pages are scraped independently and merged into [`metadata::ProviderMetadata`].
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface and logging setup
//! - [`config`] - Run configuration, TOML loading, and validation
//! - [`constants`] - Default queries, keys, and limits
//! - [`core`] - Error types and user-facing error rendering
//! - [`markdown`] - Rendering and node queries
//! - [`metadata`] - The data model and the extraction engine
//! - [`utils`] - Atomic file writes
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_scraper::config::ScrapeConfig;
//! use registry_scraper::metadata::ProviderScraper;
//! use std::path::Path;
//!
//! # async fn example() -> registry_scraper::core::ScrapeResult<()> {
//! let config = ScrapeConfig::new("hashicorp/terraform-provider-azurerm", "website/docs/r");
//! let metadata = ProviderScraper::new(config)?.scrape().await?;
//! metadata.store(Path::new("provider-metadata.yaml"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod markdown;
pub mod metadata;
pub mod utils;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
