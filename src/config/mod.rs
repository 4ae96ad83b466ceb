//! Configuration for a scraping run.
//!
//! A run is described by a [`ScrapeConfig`]. It can be built in code, loaded
//! from a TOML file, or assembled by the CLI from flags and
//! `REGISTRY_SCRAPER_*` environment variables layered on top of a file.
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing utilities with error context
//!
//! # Configuration File
//!
//! Every key is optional; missing keys take the defaults from
//! [`crate::constants`]. The provider name and the repository path must be
//! set by the file or on the command line before a run can start.
//!
//! ```toml
//! provider_name = "hashicorp/terraform-provider-azurerm"
//! repo_path = "website/docs/r"
//! output = "provider-metadata.yaml"
//! extension = "markdown"
//! skip_example_errors = false
//! skip_example_references = false
//! max_parallel = 8
//!
//! [queries]
//! code = "pre > code.language-terraform, pre > code.language-hcl"
//! prelude = "h2, p"
//! field_doc = "ul > li > code:first-child, ul > li > p > code:first-child"
//! import = "pre > code.language-shell"
//!
//! [prelude_keys]
//! title = "page_title"
//! description = "description"
//! category = "subcategory"
//! ```
//!
//! # Queries
//!
//! Queries are CSS selectors evaluated against the HTML rendering of a page.
//! A query yields the direct text children of every matched element, in
//! document order. They are compiled once per run by [`QueryConfig::compile`].

mod parser;

pub use parser::parse_config;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CODE_QUERY, DEFAULT_EXTENSION, DEFAULT_FIELD_DOC_QUERY, DEFAULT_IMPORT_QUERY, DEFAULT_OUTPUT,
    DEFAULT_PRELUDE_QUERY, KEY_DESCRIPTION, KEY_PAGE_TITLE, KEY_SUBCATEGORY, default_max_parallel,
};
use crate::core::{ScrapeError, ScrapeResult};
use crate::markdown::NodeQuery;

/// Settings of one scraping run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Provider identifier written to the output document.
    pub provider_name: String,
    /// Root directory of the documentation sources.
    pub repo_path: PathBuf,
    /// Output path of the metadata document.
    pub output: PathBuf,
    /// Extension of documentation files, without the dot.
    pub extension: String,
    /// Log and skip example snippets that are not valid HCL.
    pub skip_example_errors: bool,
    /// Do not extract attribute references from examples.
    pub skip_example_references: bool,
    /// Maximum number of documents scraped at the same time.
    pub max_parallel: usize,
    pub queries: QueryConfig,
    pub prelude_keys: PreludeKeys,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            provider_name: String::new(),
            repo_path: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_string(),
            skip_example_errors: false,
            skip_example_references: false,
            max_parallel: default_max_parallel(),
            queries: QueryConfig::default(),
            prelude_keys: PreludeKeys::default(),
        }
    }
}

impl ScrapeConfig {
    /// Default settings for scraping `repo_path` as `provider_name`.
    pub fn new(provider_name: impl Into<String>, repo_path: impl Into<PathBuf>) -> Self {
        Self {
            provider_name: provider_name.into(),
            repo_path: repo_path.into(),
            ..Self::default()
        }
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> ScrapeResult<Self> {
        let config: Self = parse_config(path)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that the settings describe a runnable scrape.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigError`] for a missing provider name or
    /// repository path, a zero parallelism limit, or an invalid query.
    pub fn validate(&self) -> ScrapeResult<()> {
        if self.provider_name.trim().is_empty() {
            return Err(config_error("provider name is required"));
        }
        if self.repo_path.as_os_str().is_empty() {
            return Err(config_error("repository path is required"));
        }
        if self.max_parallel == 0 {
            return Err(config_error("max_parallel must be at least 1"));
        }
        if self.extension().is_empty() {
            return Err(config_error("extension must not be empty"));
        }
        self.queries.compile().map(|_| ())
    }

    /// The configured extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

fn config_error(message: &str) -> ScrapeError {
    ScrapeError::ConfigError {
        message: message.to_string(),
    }
}

/// Selector expressions for the four kinds of nodes a page is scraped for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Embedded example code.
    pub code: String,
    /// Candidates for the prelude text.
    pub prelude: String,
    /// Argument anchors.
    pub field_doc: String,
    /// Import statement code.
    pub import: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE_QUERY.to_string(),
            prelude: DEFAULT_PRELUDE_QUERY.to_string(),
            field_doc: DEFAULT_FIELD_DOC_QUERY.to_string(),
            import: DEFAULT_IMPORT_QUERY.to_string(),
        }
    }
}

impl QueryConfig {
    /// Compile every expression.
    pub fn compile(&self) -> ScrapeResult<CompiledQueries> {
        Ok(CompiledQueries {
            code: NodeQuery::parse(&self.code)?,
            prelude: NodeQuery::parse(&self.prelude)?,
            field_doc: NodeQuery::parse(&self.field_doc)?,
            import: NodeQuery::parse(&self.import)?,
        })
    }
}

/// Compiled form of [`QueryConfig`].
#[derive(Debug, Clone)]
pub struct CompiledQueries {
    pub code: NodeQuery,
    pub prelude: NodeQuery,
    pub field_doc: NodeQuery,
    pub import: NodeQuery,
}

/// Key names looked up in the page prelude.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreludeKeys {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl Default for PreludeKeys {
    fn default() -> Self {
        Self {
            title: KEY_PAGE_TITLE.to_string(),
            description: KEY_DESCRIPTION.to_string(),
            category: KEY_SUBCATEGORY.to_string(),
        }
    }
}
