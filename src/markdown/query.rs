//! Path expressions used to select nodes from a rendered page.

use scraper::Selector;

use crate::core::{ScrapeError, ScrapeResult};

/// A compiled CSS selector together with the expression it was built from.
///
/// The expression is kept so configuration errors and debug logs can name the
/// query that was used.
#[derive(Debug, Clone)]
pub struct NodeQuery {
    expression: String,
    selector: Selector,
}

impl NodeQuery {
    /// Compile a CSS selector expression.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigError`] when the expression is not a valid selector.
    pub fn parse(expression: &str) -> ScrapeResult<Self> {
        let selector = Selector::parse(expression).map_err(|e| ScrapeError::ConfigError {
            message: format!("invalid query '{expression}': {e}"),
        })?;

        Ok(Self {
            expression: expression.to_string(),
            selector,
        })
    }

    /// The source expression.
    pub(crate) fn expression(&self) -> &str {
        &self.expression
    }

    pub(crate) fn selector(&self) -> &Selector {
        &self.selector
    }
}
