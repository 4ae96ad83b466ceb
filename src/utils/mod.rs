//! Utilities shared by the scraper and the CLI.
//!
//! # Modules
//!
//! - [`fs`] - Atomic file writes and directory creation

pub mod fs;

pub use fs::{atomic_write, ensure_dir, safe_write};
