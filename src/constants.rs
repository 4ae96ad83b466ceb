//! Default values shared by the configuration layer, the CLI, and the scraper.
//!
//! Keeping the defaults here means the TOML config file, the clap flags, and
//! the library entry points all agree on the same key names and selectors.

/// File extension (without the dot) of registry documentation sources.
pub const DEFAULT_EXTENSION: &str = "markdown";

/// Default output path for the provider metadata document.
pub const DEFAULT_OUTPUT: &str = "provider-metadata.yaml";

/// Block identifier of the configuration blocks that can document a resource.
pub const RESOURCE_BLOCK: &str = "resource";

/// Prelude key holding the page title.
pub const KEY_PAGE_TITLE: &str = "page_title";

/// Prelude key holding the (possibly multi-line) description.
pub const KEY_DESCRIPTION: &str = "description";

/// Prelude key holding the resource category.
pub const KEY_SUBCATEGORY: &str = "subcategory";

/// Marker of a YAML literal block scalar, stripped from descriptions.
pub const BLOCK_SCALAR_MARKER: &str = "|-";

/// Selector for embedded example configuration code.
pub const DEFAULT_CODE_QUERY: &str = "pre > code.language-terraform, pre > code.language-hcl";

/// Selector for elements that may hold the prelude text.
///
/// The rendered frontmatter ends up as a setext heading (`h2`) when the page
/// opens with a `---` line, or as a paragraph otherwise.
pub const DEFAULT_PRELUDE_QUERY: &str = "h2, p";

/// Selector for argument anchors in bulleted argument references.
pub const DEFAULT_FIELD_DOC_QUERY: &str =
    "ul > li > code:first-child, ul > li > p > code:first-child";

/// Selector for import statement code blocks.
pub const DEFAULT_IMPORT_QUERY: &str = "pre > code.language-shell";

/// Number of path segments relaxed matching may drop from the resolved name.
pub const SUFFIX_MATCH_LIMIT: usize = 1;

/// Default CPU core count when detection fails.
///
/// Used as a fallback when `std::thread::available_parallelism()` returns an error.
pub const FALLBACK_CORE_COUNT: usize = 4;

/// Default number of documents scraped concurrently.
pub fn default_max_parallel() -> usize {
    std::thread::available_parallelism().map(std::num::NonZero::get).unwrap_or(FALLBACK_CORE_COUNT)
}
