//! Builders for registry documentation pages.

/// A registry documentation page under construction.
///
/// [`MarkdownPage::render`] produces the layout used by provider
/// repositories: a `---` delimited prelude, an example section with one
/// fenced `hcl` block per example, a bulleted argument reference, and an
/// import section.
#[derive(Clone, Debug)]
pub struct MarkdownPage {
    title: String,
    category: String,
    description: String,
    examples: Vec<String>,
    arguments: Vec<(String, String)>,
    imports: Vec<String>,
    raw: Vec<String>,
}

impl MarkdownPage {
    /// A page documenting `title` in `category`.
    pub fn new(title: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            examples: Vec::new(),
            arguments: Vec::new(),
            imports: Vec::new(),
            raw: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Add an example snippet (HCL source without the fence).
    pub fn example(mut self, hcl: &str) -> Self {
        self.examples.push(hcl.to_string());
        self
    }

    /// Add an entry to the argument reference list.
    pub fn argument(mut self, name: &str, doc: &str) -> Self {
        self.arguments.push((name.to_string(), doc.to_string()));
        self
    }

    /// Add an import statement in a `shell` block.
    pub fn import(mut self, statement: &str) -> Self {
        self.imports.push(statement.to_string());
        self
    }

    /// Append raw Markdown at the end of the page.
    pub fn raw(mut self, markdown: &str) -> Self {
        self.raw.push(markdown.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("subcategory: \"{}\"\n", self.category));
        out.push_str("layout: \"widget\"\n");
        out.push_str(&format!("page_title: \"Widget: {}\"\n", self.title));
        if !self.description.is_empty() {
            out.push_str(&format!("description: |-\n  {}\n", self.description));
        }
        out.push_str("---\n\n");

        out.push_str(&format!("# {}\n\n", self.title));
        if !self.description.is_empty() {
            out.push_str(&format!("{}\n\n", self.description));
        }

        if !self.examples.is_empty() {
            out.push_str("## Example Usage\n\n");
            for example in &self.examples {
                out.push_str(&format!("```hcl\n{}\n```\n\n", example.trim_end()));
            }
        }

        if !self.arguments.is_empty() {
            out.push_str("## Argument Reference\n\nThe following arguments are supported:\n\n");
            for (name, doc) in &self.arguments {
                out.push_str(&format!("* `{name}` - {doc}\n"));
            }
            out.push('\n');
        }

        if !self.imports.is_empty() {
            out.push_str("## Import\n\n");
            for statement in &self.imports {
                out.push_str(&format!("```shell\n{statement}\n```\n\n"));
            }
        }

        for markdown in &self.raw {
            out.push_str(markdown);
            out.push('\n');
        }

        out
    }
}
