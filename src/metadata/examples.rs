//! Matching example blocks to the documented resource.
//!
//! Page titles do not always carry the exact resource type used in the
//! examples, so matching works in two modes:
//!
//! - **exact**: a block documents the resource when its type equals the
//!   resolved name; every other block is a dependency.
//! - **relaxed**: the first block whose type contains a suffix of the
//!   resolved name, or whose own suffix is contained in the resolved name
//!   (see [`suffix_match`]), is promoted: its type becomes the resolved name
//!   and the pass continues in exact mode.
//!
//! Every snippet is resolved in exact mode first. Only while the page still
//! has no examples at all is a snippet retried once in relaxed mode.
//!
//! The resolved name lives in [`Resolution`] and carries over from one
//! snippet to the next, so a promotion applies to the rest of the page.

use super::references::ReferenceExtractor;
use super::snippet::Snippet;
use super::{Dependencies, ResourceExample};
use crate::constants::SUFFIX_MATCH_LIMIT;
use crate::core::ScrapeResult;

/// Example resolution state of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    resolved_name: String,
    examples: Vec<ResourceExample>,
}

impl Resolution {
    /// Start resolving a page whose title names `title_name`.
    pub fn new(title_name: impl Into<String>) -> Self {
        Self {
            resolved_name: title_name.into(),
            examples: Vec::new(),
        }
    }

    /// The final resource name and examples.
    pub fn into_parts(self) -> (String, Vec<ResourceExample>) {
        (self.resolved_name, self.examples)
    }
}

/// Resolves the examples of a page snippet by snippet.
#[derive(Debug, Clone, Copy)]
pub struct ExampleResolver {
    references: ReferenceExtractor,
}

impl ExampleResolver {
    pub fn new(references: ReferenceExtractor) -> Self {
        Self {
            references,
        }
    }

    /// Resolve the next snippet of the page.
    ///
    /// # Errors
    ///
    /// Fails on the first block whose manifest cannot be rendered or whose
    /// references conflict.
    pub fn resolve(&self, resolution: &mut Resolution, snippet: &Snippet) -> ScrapeResult<()> {
        self.resolve_snippet(resolution, snippet, true)
    }

    fn resolve_snippet(&self, resolution: &mut Resolution, snippet: &Snippet, exact: bool) -> ScrapeResult<()> {
        let mut exact_match = exact;
        let mut dependencies = Dependencies::new();

        for block in snippet.blocks() {
            let manifest = block.manifest()?;

            if block.kind() != resolution.resolved_name {
                if exact_match || !relaxed_match(block.kind(), &resolution.resolved_name) {
                    dependencies.insert(block.key(), manifest);
                    continue;
                }

                tracing::debug!(
                    "resource name {} resolved to {} by suffix match",
                    resolution.resolved_name,
                    block.kind()
                );
                resolution.resolved_name = block.kind().to_string();
                exact_match = true;
            }

            let references = self.references.extract(&resolution.resolved_name, block, snippet.source())?;
            tracing::debug!("example {} of {}", block.name(), resolution.resolved_name);
            resolution.examples.push(ResourceExample {
                name: block.name().to_string(),
                manifest,
                references,
                dependencies: dependencies.clone(),
            });
        }

        if resolution.examples.is_empty() && exact {
            return self.resolve_snippet(resolution, snippet, false);
        }
        Ok(())
    }
}

/// Relaxed-mode test between a block type and the resolved name.
///
/// Either side may be the shorter one: `widget_instance_attachment` matches a
/// `widget_attachment` title, and a `widget_instance` block matches a
/// `widget_instance_attachment` title.
fn relaxed_match(kind: &str, resolved_name: &str) -> bool {
    suffix_match(kind, resolved_name, SUFFIX_MATCH_LIMIT) || suffix_match(resolved_name, kind, SUFFIX_MATCH_LIMIT)
}

/// Whether `label` contains one of the trailing `_`-joined segment runs of `name`.
///
/// Runs are tried from the whole name down to the name without its first
/// `limit` segments: `suffix_match(label, "widget_instance_attachment", 1)`
/// looks for `widget_instance_attachment`, then `instance_attachment`.
pub fn suffix_match(label: &str, name: &str, limit: usize) -> bool {
    let parts: Vec<&str> = name.split('_').collect();
    (0..parts.len())
        .take(limit + 1)
        .any(|i| label.contains(parts[i..].join("_").as_str()))
}
