//! Argument documentation collected from inline code anchors.
//!
//! Argument lists on registry pages look like
//!
//! ```text
//! * `subnet_id` - (Required) The ID of the <a>subnet</a>.
//! ```
//!
//! The field-doc query selects the text inside the leading `code` element
//! (the anchor). The anchor text is the argument name; the documentation is
//! every text node that follows the `code` element inside the same parent,
//! descending into nested elements in document order.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// What a [`DocNode`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// A text node with its content.
    Text(&'a str),
    /// An element; its content lives in its children.
    Element,
    /// Comments, doctypes and anything else without documentation text.
    Other,
}

/// Read-only navigation over a document tree.
///
/// Implemented for `scraper` node references in [`crate::markdown`]. Handles
/// are cheap copies; `id` gives each node a stable identity.
pub trait DocNode: Copy {
    type Id: Eq + Hash + Copy;

    fn id(&self) -> Self::Id;
    fn kind(&self) -> NodeKind<'_>;
    fn parent(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
}

/// Collect the documentation of every anchor.
///
/// Later anchors with the same argument name replace earlier ones. Anchors
/// whose documentation is empty after trimming are dropped.
pub fn collect_argument_docs<N, I>(anchors: I) -> BTreeMap<String, String>
where
    N: DocNode,
    I: IntoIterator<Item = N>,
{
    let mut docs = BTreeMap::new();

    for anchor in anchors {
        let mut visited = HashSet::new();
        let mut name = String::new();
        let doc = collect(anchor, &mut name, &mut visited);

        let doc = doc.trim();
        if doc.is_empty() || name.is_empty() {
            continue;
        }
        tracing::trace!("argument doc for {}: {}", name, doc);
        docs.insert(name, doc.to_string());
    }

    docs
}

/// Accumulate the text at `node` and after its parent.
///
/// The first text reached while `name` is empty becomes the name instead of
/// being accumulated. Every node is read at most once per anchor.
fn collect<N: DocNode>(node: N, name: &mut String, visited: &mut HashSet<N::Id>) -> String {
    if !visited.insert(node.id()) {
        return String::new();
    }

    let mut doc = String::new();
    match node.kind() {
        NodeKind::Element => {
            return node
                .first_child()
                .map(|child| collect(child, name, visited))
                .unwrap_or_default();
        }
        NodeKind::Other => return doc,
        NodeKind::Text(text) => {
            if name.is_empty() {
                *name = text.to_string();
            } else {
                doc.push_str(text);
            }
        }
    }

    let mut sibling = node.parent().and_then(|parent| parent.next_sibling());
    while let Some(current) = sibling {
        sibling = current.next_sibling();
        if !visited.insert(current.id()) {
            continue;
        }

        match current.kind() {
            NodeKind::Text(text) => doc.push_str(text),
            NodeKind::Element => {
                if let Some(child) = current.first_child() {
                    doc.push_str(&collect(child, name, visited));
                }
            }
            NodeKind::Other => {}
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{DocumentTree, NodeQuery};

    /// Minimal arena tree so the walk can be tested without an HTML parser.
    #[derive(Default)]
    struct Arena {
        nodes: Vec<ArenaNode>,
    }

    struct ArenaNode {
        text: Option<String>,
        parent: Option<usize>,
        first_child: Option<usize>,
        next_sibling: Option<usize>,
    }

    impl Arena {
        fn push(&mut self, parent: Option<usize>, text: Option<&str>) -> usize {
            let id = self.nodes.len();
            self.nodes.push(ArenaNode {
                text: text.map(str::to_string),
                parent,
                first_child: None,
                next_sibling: None,
            });

            if let Some(parent) = parent {
                match self.nodes[parent].first_child {
                    None => self.nodes[parent].first_child = Some(id),
                    Some(mut last) => {
                        while let Some(next) = self.nodes[last].next_sibling {
                            last = next;
                        }
                        self.nodes[last].next_sibling = Some(id);
                    }
                }
            }
            id
        }

        fn element(&mut self, parent: Option<usize>) -> usize {
            self.push(parent, None)
        }

        fn text(&mut self, parent: usize, text: &str) -> usize {
            self.push(Some(parent), Some(text))
        }

        fn node(&self, id: usize) -> ArenaRef<'_> {
            ArenaRef {
                arena: self,
                id,
            }
        }
    }

    #[derive(Clone, Copy)]
    struct ArenaRef<'a> {
        arena: &'a Arena,
        id: usize,
    }

    impl<'a> ArenaRef<'a> {
        fn at(&self, id: Option<usize>) -> Option<Self> {
            id.map(|id| self.arena.node(id))
        }
    }

    impl<'a> DocNode for ArenaRef<'a> {
        type Id = usize;

        fn id(&self) -> usize {
            self.id
        }

        fn kind(&self) -> NodeKind<'_> {
            match &self.arena.nodes[self.id].text {
                Some(text) => NodeKind::Text(text),
                None => NodeKind::Element,
            }
        }

        fn parent(&self) -> Option<Self> {
            self.at(self.arena.nodes[self.id].parent)
        }

        fn first_child(&self) -> Option<Self> {
            self.at(self.arena.nodes[self.id].first_child)
        }

        fn next_sibling(&self) -> Option<Self> {
            self.at(self.arena.nodes[self.id].next_sibling)
        }
    }

    fn html_docs(html: &str) -> BTreeMap<String, String> {
        let tree = DocumentTree::from_html(html);
        let query = NodeQuery::parse(crate::constants::DEFAULT_FIELD_DOC_QUERY).unwrap();
        collect_argument_docs(tree.select_text(&query))
    }

    #[test]
    fn test_anchor_with_text_and_nested_emphasis() {
        let mut arena = Arena::default();
        let li = arena.element(None);
        let code = arena.element(Some(li));
        let anchor = arena.text(code, "subnet_id");
        arena.text(li, "The ID of the subnet.");
        let em = arena.element(Some(li));
        arena.text(em, "(required)");

        let docs = collect_argument_docs([arena.node(anchor)]);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs["subnet_id"], "The ID of the subnet.(required)");
    }

    #[test]
    fn test_childless_elements_are_skipped() {
        let mut arena = Arena::default();
        let li = arena.element(None);
        let code = arena.element(Some(li));
        let anchor = arena.text(code, "name");
        arena.text(li, " - The name");
        arena.element(Some(li));
        arena.text(li, " of the widget.");

        let docs = collect_argument_docs([arena.node(anchor)]);
        assert_eq!(docs["name"], "- The name of the widget.");
    }

    #[test]
    fn test_anchor_without_siblings_yields_nothing() {
        let mut arena = Arena::default();
        let root = arena.element(None);
        let anchor = arena.text(root, "orphan");

        let docs = collect_argument_docs([arena.node(anchor)]);
        assert!(docs.is_empty());
    }

    #[test]
    fn test_rendered_argument_list() {
        let tree = DocumentTree::from_markdown(
            "## Arguments Reference\n\n* `name` - (Required) The name of the subnet.\n* `tags` - A mapping of [tags](#tags) to assign.\n",
        );
        let query = NodeQuery::parse(crate::constants::DEFAULT_FIELD_DOC_QUERY).unwrap();
        let docs = collect_argument_docs(tree.select_text(&query));

        assert_eq!(docs["name"], "- (Required) The name of the subnet.");
        assert_eq!(docs["tags"], "- A mapping of tags to assign.");
    }

    #[test]
    fn test_deeply_nested_text_is_in_document_order() {
        let docs = html_docs(
            "<ul><li><code>sku</code> - One of <strong><code>Basic</code> or <em>Standard</em></strong>. Defaults to <code>Basic</code>.</li></ul>",
        );
        assert_eq!(docs["sku"], "- One of Basic or Standard. Defaults to Basic.");
    }

    #[test]
    fn test_duplicate_argument_last_wins() {
        let docs = html_docs(
            "<ul><li><code>id</code> - first description</li></ul><ul><li><code>id</code> - second description</li></ul>",
        );
        assert_eq!(docs.len(), 1);
        assert_eq!(docs["id"], "- second description");
    }

    #[test]
    fn test_empty_documentation_is_dropped() {
        let docs = html_docs("<ul><li><code>id</code>   </li><li><code>name</code> - The name.</li></ul>");
        assert!(!docs.contains_key("id"));
        assert_eq!(docs["name"], "- The name.");
    }

    #[test]
    fn test_paragraph_wrapped_list_items() {
        let docs = html_docs("<ul><li><p><code>location</code> - The Azure region.</p></li></ul>");
        assert_eq!(docs["location"], "- The Azure region.");
    }
}
