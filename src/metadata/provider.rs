//! Scraping every documentation page of a provider.
//!
//! Documents are discovered with `walkdir`, scraped on blocking tasks with at
//! most `max_parallel` in flight, and merged in discovery order. The merged
//! result is therefore identical to a sequential run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use walkdir::WalkDir;

use super::{ProviderMetadata, Resource, ResourceScraper};
use crate::config::ScrapeConfig;
use crate::core::{ScrapeError, ScrapeResult};

/// Documentation files under `root` with the given extension.
///
/// Entries are sorted by file name within each directory, so the order is
/// stable across platforms and runs.
pub fn discover_documents(root: &Path, extension: &str) -> ScrapeResult<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            ScrapeError::IoFailure {
                operation: "traverse documentation directory".to_string(),
                path,
                source,
            }
        })?;

        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == extension) {
            documents.push(entry.into_path());
        }
    }

    Ok(documents)
}

/// Scrapes a provider documentation tree into [`ProviderMetadata`].
#[derive(Debug, Clone)]
pub struct ProviderScraper {
    config: ScrapeConfig,
    scraper: Arc<ResourceScraper>,
}

impl ProviderScraper {
    /// Validate `config` and compile its queries.
    pub fn new(config: ScrapeConfig) -> ScrapeResult<Self> {
        config.validate()?;
        let scraper = Arc::new(ResourceScraper::new(&config)?);
        Ok(Self {
            config,
            scraper,
        })
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape every document, up to `max_parallel` at a time.
    ///
    /// # Errors
    ///
    /// The first failing document (in discovery order) aborts the run with
    /// [`ScrapeError::DocumentFailure`].
    pub async fn scrape(&self) -> ScrapeResult<ProviderMetadata> {
        let documents = self.discover()?;
        let max_parallel = self.config.max_parallel.max(1);
        tracing::debug!("scraping {} documents with up to {} workers", documents.len(), max_parallel);

        let resources: Vec<(PathBuf, Resource)> = stream::iter(documents)
            .map(|path| {
                let scraper = Arc::clone(&self.scraper);
                async move {
                    let task_path = path.clone();
                    let result = tokio::task::spawn_blocking(move || scraper.scrape_document(&task_path))
                        .await
                        .map_err(|e| ScrapeError::Other {
                            message: format!("scrape task failed: {e}"),
                        })?;
                    match result {
                        Ok(resource) => Ok((path, resource)),
                        Err(e) => Err(e.in_document(path)),
                    }
                }
            })
            .buffered(max_parallel)
            .try_collect()
            .await?;

        Ok(self.merge(resources))
    }

    /// Scrape every document sequentially on the current thread.
    pub fn scrape_blocking(&self) -> ScrapeResult<ProviderMetadata> {
        let resources = self
            .discover()?
            .into_iter()
            .map(|path| match self.scraper.scrape_document(&path) {
                Ok(resource) => Ok((path, resource)),
                Err(e) => Err(e.in_document(path)),
            })
            .collect::<ScrapeResult<Vec<_>>>()?;

        Ok(self.merge(resources))
    }

    fn discover(&self) -> ScrapeResult<Vec<PathBuf>> {
        let documents = discover_documents(&self.config.repo_path, self.config.extension())?;
        if documents.is_empty() {
            tracing::warn!(
                "No .{} documents found under {}",
                self.config.extension(),
                self.config.repo_path.display()
            );
        }
        Ok(documents)
    }

    fn merge(&self, resources: Vec<(PathBuf, Resource)>) -> ProviderMetadata {
        let mut metadata = ProviderMetadata::new(&self.config.provider_name);
        let mut sources: HashMap<String, PathBuf> = HashMap::new();

        for (path, resource) in resources {
            if let Some(previous) = sources.insert(resource.name.clone(), path.clone()) {
                tracing::warn!(
                    "Resource {} documented by both {} and {}; keeping {}",
                    resource.name,
                    previous.display(),
                    path.display(),
                    path.display()
                );
            }
            metadata.resources.insert(resource.name.clone(), resource);
        }

        tracing::info!("Scraped {} resources for {}", metadata.resources.len(), metadata.name);
        metadata
    }
}
