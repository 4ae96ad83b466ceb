//! Temporary documentation trees.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use super::fixtures::MarkdownPage;

/// A documentation repository in a temporary directory.
///
/// The directory is removed when the value is dropped. Helpers panic on
/// I/O failure since they only run inside tests.
pub struct DocsRepo {
    temp_dir: TempDir,
}

impl DocsRepo {
    pub fn new() -> Self {
        super::init_test_logging(None);

        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root of the documentation tree.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a rendered page at `relative`, creating parent directories.
    pub fn add_page(&self, relative: &str, page: &MarkdownPage) {
        self.add_file(relative, &page.render());
    }

    /// Write arbitrary content at `relative`, creating parent directories.
    pub fn add_file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write documentation file");
    }
}

impl Default for DocsRepo {
    fn default() -> Self {
        Self::new()
    }
}
