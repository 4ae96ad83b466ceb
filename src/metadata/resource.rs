//! Scraping a single documentation page into a [`Resource`].

use std::path::Path;

use super::examples::{ExampleResolver, Resolution};
use super::field_docs::collect_argument_docs;
use super::prelude::{Prelude, parse_prelude};
use super::references::ReferenceExtractor;
use super::snippet::Snippet;
use super::{Resource, ResourceExample};
use crate::config::{CompiledQueries, PreludeKeys, ScrapeConfig};
use crate::core::{ScrapeError, ScrapeResult};
use crate::markdown::DocumentTree;

/// Builds [`Resource`] metadata from documentation pages.
///
/// A scraper holds only compiled settings, so one instance can be shared by
/// every worker of a run.
#[derive(Debug, Clone)]
pub struct ResourceScraper {
    queries: CompiledQueries,
    prelude_keys: PreludeKeys,
    skip_example_errors: bool,
    resolver: ExampleResolver,
}

impl ResourceScraper {
    /// Compile the queries of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigError`] if a query is not a valid selector.
    pub fn new(config: &ScrapeConfig) -> ScrapeResult<Self> {
        Ok(Self {
            queries: config.queries.compile()?,
            prelude_keys: config.prelude_keys.clone(),
            skip_example_errors: config.skip_example_errors,
            resolver: ExampleResolver::new(ReferenceExtractor::new(!config.skip_example_references)),
        })
    }

    /// Read and scrape the page at `path`.
    pub fn scrape_document(&self, path: &Path) -> ScrapeResult<Resource> {
        tracing::debug!("scraping {}", path.display());
        let markdown = std::fs::read_to_string(path).map_err(|source| ScrapeError::IoFailure {
            operation: "read markdown file".to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        self.scrape_markdown(&markdown)
    }

    /// Scrape one page from its Markdown source.
    ///
    /// The prelude is mandatory. Argument docs and import statements are
    /// collected on a best-effort basis; examples fail the page unless
    /// invalid snippets are configured to be skipped.
    pub fn scrape_markdown(&self, markdown: &str) -> ScrapeResult<Resource> {
        let tree = DocumentTree::from_markdown(markdown);

        let prelude = self.scrape_prelude(&tree)?;
        let argument_docs = collect_argument_docs(tree.select_text(&self.queries.field_doc));
        let import_statements = self.scrape_import_statements(&tree);
        let (name, examples) = self.scrape_examples(&tree, &prelude.title)?;

        tracing::debug!(
            "scraped {} ({} examples, {} argument docs)",
            name,
            examples.len(),
            argument_docs.len()
        );

        Ok(Resource {
            sub_category: prelude.category,
            description: prelude.description,
            name,
            title_name: prelude.title,
            examples,
            argument_docs,
            import_statements,
        })
    }

    fn scrape_prelude(&self, tree: &DocumentTree) -> ScrapeResult<Prelude> {
        let keys = &self.prelude_keys;
        let raw = tree
            .select_strings(&self.queries.prelude)
            .into_iter()
            .find(|text| text.contains(&keys.title) && text.contains(&keys.category))
            .unwrap_or_default();

        parse_prelude(&raw, keys)
    }

    fn scrape_import_statements(&self, tree: &DocumentTree) -> Vec<String> {
        tree.select_strings(&self.queries.import)
            .iter()
            .map(|statement| statement.trim().to_string())
            .collect()
    }

    fn scrape_examples(&self, tree: &DocumentTree, title: &str) -> ScrapeResult<(String, Vec<ResourceExample>)> {
        let mut resolution = Resolution::new(title);

        for source in tree.select_strings(&self.queries.code) {
            let snippet = match Snippet::parse(&source) {
                Ok(snippet) => snippet,
                Err(e) if self.skip_example_errors => {
                    tracing::warn!("Skipping example of {}: {}", title, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            self.resolver.resolve(&mut resolution, &snippet)?;
        }

        Ok(resolution.into_parts())
    }
}
