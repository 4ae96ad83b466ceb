//! Test utilities for the registry scraper
//!
//! This module provides helpers for writing tests against the scraper:
//! - [`MarkdownPage`] builds registry documentation pages
//! - [`DocsRepo`] lays pages out in a temporary documentation tree
//! - [`init_test_logging`] wires `tracing` output into the test harness
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_scraper::test_utils::{DocsRepo, MarkdownPage};
//!
//! let repo = DocsRepo::new();
//! repo.add_page(
//!     "r/widget_instance.html.markdown",
//!     &MarkdownPage::new("widget_instance", "Compute").argument("size", "The size."),
//! );
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::DocsRepo;
pub use fixtures::MarkdownPage;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. The provided level wins; otherwise
/// `RUST_LOG` is used if set, and nothing is logged if neither is given.
///
/// ```bash
/// RUST_LOG=registry_scraper=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
