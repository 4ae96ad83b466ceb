//! Markdown rendering and document tree access for registry pages.
//!
//! Registry documentation is written in Markdown. The scraper never inspects
//! the Markdown source directly: pages are rendered to HTML with
//! `pulldown-cmark` and parsed into an HTML tree with `scraper`, and every
//! extraction step works on nodes selected from that tree by a [`NodeQuery`].
//!
//! # Rendered Page Shapes
//!
//! A typical page renders to the following shapes, which the default queries
//! in [`crate::constants`] select:
//!
//! | Markdown | HTML |
//! |----------|------|
//! | Frontmatter between `---` lines | `<hr />` followed by an `<h2>` holding the key lines |
//! | ```` ```hcl ```` fenced block | `<pre><code class="language-hcl">` |
//! | ``* `subnet_id` - The ID of the subnet.`` | `<ul><li><code>subnet_id</code> - The ID…</li></ul>` |
//! | ```` ```shell ```` fenced block | `<pre><code class="language-shell">` |
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_scraper::markdown::{DocumentTree, NodeQuery};
//!
//! # fn example() -> registry_scraper::core::ScrapeResult<()> {
//! let tree = DocumentTree::from_markdown("* `name` - The name of the widget.");
//! let anchors = NodeQuery::parse("ul > li > code")?;
//! assert_eq!(tree.select_strings(&anchors), vec!["name".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod query;

pub use query::NodeQuery;

use ego_tree::{NodeId, NodeRef};
use pulldown_cmark::{Options, Parser, html};
use scraper::{Html, Node};

use crate::metadata::field_docs::{DocNode, NodeKind};

/// Render Markdown source to an HTML string.
///
/// Only CommonMark plus tables and strikethrough are enabled. YAML metadata
/// blocks stay disabled, so the page prelude is part of the rendered tree.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// A parsed HTML tree of one documentation page.
pub struct DocumentTree {
    html: Html,
}

impl std::fmt::Debug for DocumentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTree").finish_non_exhaustive()
    }
}

impl DocumentTree {
    /// Render `markdown` and parse the resulting HTML.
    pub fn from_markdown(markdown: &str) -> Self {
        Self::from_html(&render_html(markdown))
    }

    /// Parse an already rendered HTML document.
    pub fn from_html(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Text nodes selected by `query`, in document order.
    ///
    /// A query selects elements; the result is the direct text children of
    /// every selected element.
    pub fn select_text<'a>(&'a self, query: &NodeQuery) -> Vec<NodeRef<'a, Node>> {
        let nodes: Vec<NodeRef<'a, Node>> = self
            .html
            .select(query.selector())
            .flat_map(|element| element.children().filter(|child| child.value().is_text()))
            .collect();
        tracing::trace!("query '{}' selected {} text nodes", query.expression(), nodes.len());
        nodes
    }

    /// Contents of the text nodes selected by `query`, in document order.
    pub fn select_strings(&self, query: &NodeQuery) -> Vec<String> {
        self.select_text(query)
            .into_iter()
            .filter_map(|node| node.value().as_text().map(|text| (&**text).to_string()))
            .collect()
    }
}

impl<'a> DocNode for NodeRef<'a, Node> {
    type Id = NodeId;

    fn id(&self) -> NodeId {
        NodeRef::id(self)
    }

    fn kind(&self) -> NodeKind<'_> {
        match self.value() {
            Node::Text(text) => NodeKind::Text(&**text),
            Node::Element(_) => NodeKind::Element,
            _ => NodeKind::Other,
        }
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn first_child(&self) -> Option<Self> {
        NodeRef::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        NodeRef::next_sibling(self)
    }
}
