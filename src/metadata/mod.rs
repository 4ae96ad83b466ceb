//! Provider resource metadata scraped from registry documentation.
//!
//! This module holds the output data model and the extraction engine that
//! produces it. The engine is split the same way a page is processed:
//!
//! - [`prelude`] - title, description and category from the page prelude
//! - [`field_docs`] - per-argument documentation from bulleted argument lists
//! - [`snippet`] - HCL parsing of embedded examples and JSON manifest rendering
//! - [`references`] - cross-block attribute references of a matched example
//! - [`examples`] - matching example blocks to the documented resource
//! - [`resource`] - orchestration of the above for a single document
//! - [`provider`] - document discovery and aggregation for a whole provider
//!
//! # Output Format
//!
//! [`ProviderMetadata`] is stored as YAML:
//!
//! ```yaml
//! name: hashicorp/terraform-provider-azurerm
//! resources:
//!   azurerm_subnet:
//!     subCategory: Network
//!     description: Manages a subnet.
//!     name: azurerm_subnet
//!     titleName: azurerm_subnet
//!     examples:
//!       - name: example
//!         manifest: |-
//!           {
//!             "resource_group_name": "${azurerm_resource_group.example.name}"
//!           }
//!         references:
//!           resource_group_name: azurerm_resource_group.example.name
//!         dependencies:
//!           azurerm_resource_group.example: |-
//!             {
//!               "location": "West Europe"
//!             }
//!     argumentDocs:
//!       name: The name of the subnet.
//!     importStatements:
//!       - terraform import azurerm_subnet.example /subscriptions/...
//! ```
//!
//! Empty descriptions, examples, references and dependencies are omitted.

pub mod examples;
pub mod field_docs;
pub mod prelude;
pub mod provider;
pub mod references;
pub mod resource;
pub mod snippet;

pub use examples::{ExampleResolver, Resolution};
pub use provider::ProviderScraper;
pub use resource::ResourceScraper;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{ScrapeError, ScrapeResult};
use crate::utils::fs::safe_write;

/// Dependency blocks of an example, keyed by `"<type>.<name>"`.
pub type Dependencies = BTreeMap<String, String>;

/// Metadata for every resource of one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Provider identifier, e.g. `hashicorp/terraform-provider-azurerm`.
    pub name: String,
    /// Resources keyed by resolved resource name.
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

/// Metadata scraped from one documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Category from the prelude (`subcategory`).
    pub sub_category: String,
    /// Human-readable description from the prelude.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Resolved resource name; the key of this resource in [`ProviderMetadata`].
    pub name: String,
    /// Resource name as found in the page title.
    pub title_name: String,
    /// Examples matched to this resource, in page order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ResourceExample>,
    /// Documentation text per argument name.
    #[serde(default)]
    pub argument_docs: BTreeMap<String, String>,
    /// Import statements, verbatim.
    #[serde(default)]
    pub import_statements: Vec<String>,
}

/// One example configuration block of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceExample {
    /// The block's name label.
    pub name: String,
    /// JSON rendering of the block body.
    pub manifest: String,
    /// Attribute name → raw reference expression.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<String, String>,
    /// Blocks of the same snippet that precede this example and do not document the resource.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: Dependencies,
}

impl ProviderMetadata {
    /// Create empty metadata for the named provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Load metadata previously written by [`ProviderMetadata::store`].
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::IoFailure`] if the file cannot be read and
    /// [`ScrapeError::InvalidMetadata`] if it is not a metadata document.
    pub fn load(path: &Path) -> ScrapeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScrapeError::IoFailure {
            operation: "read metadata file".to_string(),
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|e| ScrapeError::InvalidMetadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Serialize to YAML and write atomically to `path`.
    pub fn store(&self, path: &Path) -> ScrapeResult<()> {
        let out = serde_yaml::to_string(self).map_err(|e| ScrapeError::Other {
            message: format!("Failed to marshal provider metadata to YAML: {e}"),
        })?;
        safe_write(path, &out)
    }
}
