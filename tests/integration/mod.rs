//! Integration test suite for registry-scraper
//!
//! End-to-end tests that run the library against documentation trees on disk
//! and drive the `registry-scraper` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: Binary exit codes, summary output, and error rendering
//! - **scrape**: Library-level scraping of realistic provider pages

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod scrape;
