//! File system helpers for writing the metadata document.
//!
//! Writes are atomic: content goes to a temporary file in the target
//! directory, is synced, and then renamed over the target. Readers never see
//! a partially written metadata file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use registry_scraper::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> registry_scraper::core::ScrapeResult<()> {
//! ensure_dir(Path::new("output"))?;
//! safe_write(Path::new("output/provider-metadata.yaml"), "name: example\n")?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::{ScrapeError, ScrapeResult};

fn io_failure(operation: &str, path: &Path, source: std::io::Error) -> ScrapeError {
    ScrapeError::IoFailure {
        operation: operation.to_string(),
        path: path.to_path_buf(),
        source,
    }
}

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Fails if creation fails or if `path` exists and is not a directory.
pub fn ensure_dir(path: &Path) -> ScrapeResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| io_failure("create directory", path, e))?;
    } else if !path.is_dir() {
        return Err(io_failure(
            "create directory",
            path,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    Ok(())
}

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> ScrapeResult<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// Parent directories are created when missing.
pub fn atomic_write(path: &Path, content: &[u8]) -> ScrapeResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| io_failure("create temp file in", parent, e))?;
    temp.write_all(content).map_err(|e| io_failure("write temp file for", path, e))?;
    temp.as_file().sync_all().map_err(|e| io_failure("sync temp file for", path, e))?;

    temp.persist(path).map_err(|e| io_failure("rename temp file to", path, e.error))?;
    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
