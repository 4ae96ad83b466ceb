//! Common test utilities for registry-scraper integration tests

// Allow dead code because these utilities are used across different test files
// and not all utilities are used in every test file
#![allow(dead_code)]

use assert_cmd::Command;
use registry_scraper::test_utils::{DocsRepo, MarkdownPage};
use std::path::PathBuf;

/// A documentation repository plus the output location of a run.
pub struct ScrapeProject {
    pub repo: DocsRepo,
}

impl ScrapeProject {
    pub fn new() -> Self {
        Self {
            repo: DocsRepo::new(),
        }
    }

    /// Directory passed as `--repo-path`.
    pub fn docs_dir(&self) -> PathBuf {
        self.repo.path().join("docs")
    }

    /// File passed as `--output`.
    pub fn output(&self) -> PathBuf {
        self.repo.path().join("out").join("provider-metadata.yaml")
    }

    /// Add a page below the docs directory.
    pub fn add_page(&self, relative: &str, page: &MarkdownPage) {
        self.repo.add_page(&format!("docs/{relative}"), page);
    }

    /// Add arbitrary content below the docs directory.
    pub fn add_file(&self, relative: &str, content: &str) {
        self.repo.add_file(&format!("docs/{relative}"), content);
    }

    /// The binary, preconfigured with provider, repository, and output.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("registry-scraper").unwrap();
        cmd.env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--provider-name")
            .arg("example/terraform-provider-widget")
            .arg("--repo-path")
            .arg(self.docs_dir())
            .arg("--output")
            .arg(self.output());
        cmd
    }
}

/// A page documenting `title` with one matching example and one argument.
pub fn widget_page(title: &str) -> MarkdownPage {
    MarkdownPage::new(title, "Compute")
        .description(&format!("Manages a {title}."))
        .example(&format!(
            "resource \"widget_network\" \"net\" {{\n  cidr = \"10.0.0.0/16\"\n}}\n\nresource \"{title}\" \"example\" {{\n  network_id = widget_network.net.id\n}}"
        ))
        .argument("network_id", "(Required) The ID of the network.")
        .import(&format!("terraform import {title}.example 12345"))
}
