//! Generic configuration parsing utilities.
//!
//! TOML parsing for any configuration structure that implements
//! [`serde::de::DeserializeOwned`], with the file path included in every
//! error message.
//!
//! # Usage
//!
//! ```rust,no_run
//! use registry_scraper::config::{ScrapeConfig, parse_config};
//! use std::path::Path;
//!
//! # fn example() -> registry_scraper::core::ScrapeResult<()> {
//! let config: ScrapeConfig = parse_config(Path::new("scraper.toml"))?;
//! println!("Scraping {}", config.provider_name);
//! # Ok(())
//! # }
//! ```
//!
//! Example error output:
//! ```text
//! Configuration error: Failed to parse config file /path/to/scraper.toml: invalid type: string "yes", expected a boolean
//! ```

use std::path::Path;

use crate::core::{ScrapeError, ScrapeResult};

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Returns [`ScrapeError::ConfigError`] naming the file when it cannot be
/// read or when its content does not deserialize into `T`.
pub fn parse_config<T>(path: &Path) -> ScrapeResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|e| ScrapeError::ConfigError {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&content).map_err(|e| ScrapeError::ConfigError {
        message: format!("Failed to parse config file {}: {}", path.display(), e.message()),
    })
}
