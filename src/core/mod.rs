//! Core types shared by every part of the scraper.
//!
//! Currently this is the error taxonomy ([`ScrapeError`]) together with the
//! user-facing rendering used by the CLI ([`ErrorContext`], [`user_friendly_error`]).

pub mod error;

pub use error::{ErrorContext, ScrapeError, ScrapeResult, user_friendly_error};
