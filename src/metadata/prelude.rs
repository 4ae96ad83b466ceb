//! Prelude parsing for registry pages.
//!
//! The prelude is the frontmatter block at the top of every page. After
//! rendering it is no longer YAML but a single text node, so it is parsed
//! line by line rather than with a YAML parser:
//!
//! ```text
//! subcategory: "Network"
//! layout: "azurerm"
//! page_title: "Azure Resource Manager: azurerm_subnet"
//! description: |-
//! Manages a subnet. Subnets represent network segments within the IP space
//! defined by the virtual network.
//! ```
//!
//! Every line after the description line is appended to the description.

use crate::config::PreludeKeys;
use crate::constants::BLOCK_SCALAR_MARKER;
use crate::core::{ScrapeError, ScrapeResult};

/// Fields recovered from a page prelude.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prelude {
    /// Resource name from the title key (text after the last colon).
    pub title: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Resource category.
    pub category: String,
}

/// Parse a prelude text node.
///
/// # Errors
///
/// Returns [`ScrapeError::MalformedPrelude`] when the title or the category is
/// missing. The error carries the raw text.
pub fn parse_prelude(raw: &str, keys: &PreludeKeys) -> ScrapeResult<Prelude> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut prelude = Prelude::default();
    let mut description_line = None;

    for (i, line) in lines.iter().enumerate() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        if key == keys.title {
            // titles look like "Provider: resource_name"; keep the last segment
            let last = line.rsplit_once(':').map_or(value, |(_, last)| last);
            prelude.title = unquote(last);
        } else if key == keys.description {
            prelude.description = value.to_string();
            description_line = Some(i);
        } else if key == keys.category {
            prelude.category = unquote(value);
        }
    }

    if let Some(i) = description_line {
        prelude.description.push_str(&lines[i + 1..].join(" "));
    }
    prelude.description = prelude.description.replacen(BLOCK_SCALAR_MARKER, "", 1).trim().to_string();

    if prelude.title.is_empty() || prelude.category.is_empty() {
        return Err(ScrapeError::MalformedPrelude {
            title: prelude.title,
            category: prelude.category,
            description: prelude.description,
            raw: raw.to_string(),
        });
    }
    Ok(prelude)
}

fn unquote(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}
