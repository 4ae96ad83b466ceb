//! Attribute references of a matched example block.
//!
//! An attribute is a reference when its value traverses into another named
//! entity, e.g. `subnet_id = azurerm_subnet.example.id` or
//! `location = azurerm_resource_group.main["west"].location`. The recorded
//! value is the expression exactly as written in the snippet.

use std::collections::BTreeMap;

use hcl_edit::Span;
use hcl_edit::expr::{Expression, TraversalOperator};

use super::snippet::ExampleBlock;
use crate::core::{ScrapeError, ScrapeResult};

/// Extracts attribute references; can be switched off entirely.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceExtractor {
    enabled: bool,
}

impl ReferenceExtractor {
    /// A disabled extractor finds no references in any block.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
        }
    }

    /// Map each referencing attribute of `block` to its expression text.
    ///
    /// `source` must be the snippet text `block` was parsed from.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConflictingReference`] if one attribute is
    /// assigned two different references.
    pub fn extract(
        &self,
        resource: &str,
        block: &ExampleBlock,
        source: &str,
    ) -> ScrapeResult<BTreeMap<String, String>> {
        let mut references = BTreeMap::new();
        if !self.enabled {
            return Ok(references);
        }

        for attribute in block.attributes() {
            if !is_reference(&attribute.value) {
                continue;
            }
            let Some(text) = attribute.value.span().and_then(|range| source.get(range)) else {
                tracing::debug!("no source span for {}.{}", resource, attribute.key.as_str());
                continue;
            };

            insert_reference(&mut references, resource, attribute.key.as_str(), text.trim())?;
        }

        Ok(references)
    }
}

fn insert_reference(
    references: &mut BTreeMap<String, String>,
    resource: &str,
    attribute: &str,
    value: &str,
) -> ScrapeResult<()> {
    match references.get(attribute) {
        Some(existing) if existing != value => Err(ScrapeError::ConflictingReference {
            resource: resource.to_string(),
            attribute: attribute.to_string(),
            existing: existing.clone(),
            new: value.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            references.insert(attribute.to_string(), value.to_string());
            Ok(())
        }
    }
}

/// A variable root followed by attribute access or literal indexing.
fn is_reference(expression: &Expression) -> bool {
    let Expression::Traversal(traversal) = expression else {
        return false;
    };
    if !matches!(traversal.expr, Expression::Variable(_)) || traversal.operators.is_empty() {
        return false;
    }

    traversal.operators.iter().all(|operator| match operator.value() {
        TraversalOperator::GetAttr(_) | TraversalOperator::LegacyIndex(_) => true,
        TraversalOperator::Index(index) => {
            matches!(index, Expression::Number(_) | Expression::String(_))
        }
        TraversalOperator::AttrSplat(_) | TraversalOperator::FullSplat(_) => false,
    })
}
