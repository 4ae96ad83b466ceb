//! Example snippets: HCL parsing and JSON manifest rendering.
//!
//! Every code block selected by the code query is one snippet. A snippet may
//! declare many blocks; only `resource "<type>" "<name>"` declarations take
//! part in example resolution, everything else (`provider`, `data`,
//! `variable`, ...) is dropped at parse time.

use hcl_edit::structure::{Attribute, BlockLabel, Body, Structure};

use crate::constants::RESOURCE_BLOCK;
use crate::core::{ScrapeError, ScrapeResult};

/// One `resource` block of a snippet.
#[derive(Debug, Clone)]
pub struct ExampleBlock {
    kind: String,
    name: String,
    body: Body,
}

impl ExampleBlock {
    /// The resource type label, e.g. `azurerm_subnet`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The resource name label, e.g. `example`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dependency key: `"<type>.<name>"`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.kind, self.name)
    }

    /// Top-level attributes of the block body, in source order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.body.iter().filter_map(Structure::as_attribute)
    }

    /// Render the block body as indented JSON.
    ///
    /// Literal values keep their JSON type; any other expression becomes an
    /// interpolation string such as `"${azurerm_resource_group.example.name}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConversionFailure`] if the body cannot be
    /// expressed as JSON.
    pub fn manifest(&self) -> ScrapeResult<String> {
        let conversion_failure = |reason: String| ScrapeError::ConversionFailure {
            block: self.key(),
            reason,
        };

        let value: serde_json::Value =
            hcl::from_str(&self.body.to_string()).map_err(|e| conversion_failure(e.to_string()))?;
        serde_json::to_string_pretty(&value).map_err(|e| conversion_failure(e.to_string()))
    }
}

/// A parsed example snippet.
#[derive(Debug, Clone)]
pub struct Snippet {
    source: String,
    blocks: Vec<ExampleBlock>,
}

impl Snippet {
    /// Parse snippet source text.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigParseFailure`] carrying the snippet text
    /// if it is not valid HCL.
    pub fn parse(source: &str) -> ScrapeResult<Self> {
        let body = hcl_edit::parser::parse_body(source).map_err(|e| ScrapeError::ConfigParseFailure {
            snippet: source.to_string(),
            reason: e.to_string(),
        })?;

        let blocks = body
            .into_iter()
            .filter_map(|structure| match structure {
                Structure::Block(block) => Some(block),
                Structure::Attribute(_) => None,
            })
            .filter(|block| block.ident.as_str() == RESOURCE_BLOCK)
            .filter_map(|block| {
                let [kind, name] = block.labels.as_slice() else {
                    tracing::debug!("skipping resource block with {} labels", block.labels.len());
                    return None;
                };
                Some(ExampleBlock {
                    kind: label_text(kind).to_string(),
                    name: label_text(name).to_string(),
                    body: block.body,
                })
            })
            .collect();

        Ok(Self {
            source: source.to_string(),
            blocks,
        })
    }

    /// The snippet text as it appears on the page.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `resource` blocks in source order.
    pub fn blocks(&self) -> &[ExampleBlock] {
        &self.blocks
    }
}

fn label_text(label: &BlockLabel) -> &str {
    match label {
        BlockLabel::Ident(ident) => ident.as_str(),
        BlockLabel::String(value) => value.as_str(),
    }
}
