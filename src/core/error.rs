//! Error handling for the registry scraper
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`ScrapeError`]) so callers and tests can match on
//!    the exact failure mode of the extraction engine
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and actionable
//!    suggestions for CLI users
//!
//! # Error Categories
//!
//! - **I/O**: [`ScrapeError::IoFailure`] - a document or the output could not be read/written
//! - **Documents**: [`ScrapeError::MalformedPrelude`], [`ScrapeError::DocumentFailure`]
//! - **Examples**: [`ScrapeError::ConfigParseFailure`], [`ScrapeError::ConflictingReference`],
//!   [`ScrapeError::ConversionFailure`]
//! - **Configuration**: [`ScrapeError::ConfigError`], [`ScrapeError::InvalidMetadata`]
//!
//! Every error raised while scraping a single document is wrapped into
//! [`ScrapeError::DocumentFailure`] by the aggregator, so the path of the
//! offending file is always part of the message.
//!
//! # Examples
//!
//! ```rust,no_run
//! use registry_scraper::core::{ScrapeError, user_friendly_error};
//!
//! let error = ScrapeError::ConfigError {
//!     message: "provider name is required".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for scraping operations
///
/// Each variant corresponds to one failure mode of the extraction engine.
/// Variants carry the names needed to diagnose the failure without re-running
/// the scrape: file paths, resource and attribute names, raw prelude text.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A source document or the output artifact could not be read or written
    #[error("Failed to {operation} {}: {source}", path.display())]
    IoFailure {
        /// What was being attempted (e.g. "read markdown file")
        operation: String,
        /// The file involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The page prelude is missing its title or its category
    ///
    /// The description is not required and may legitimately be empty. The raw
    /// prelude text is kept for diagnosis.
    #[error(
        "Failed to parse prelude. Description: {description}, Subcategory: {category}, Title name: {title}. Raw data: {raw}"
    )]
    MalformedPrelude {
        /// Title parsed so far (may be empty)
        title: String,
        /// Category parsed so far (may be empty)
        category: String,
        /// Description parsed so far
        description: String,
        /// Raw text of the prelude node (empty when no prelude node was found)
        raw: String,
    },

    /// An embedded example snippet is not valid HCL
    #[error("Failed to parse example Terraform configuration: {reason}\nConfiguration:\n{snippet}")]
    ConfigParseFailure {
        /// Source of the snippet that failed to parse
        snippet: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Two occurrences of one attribute refer to different targets
    #[error("Attribute {resource}.{attribute} refers to {existing}. New reference: {new}")]
    ConflictingReference {
        /// Resolved name of the resource whose block is being examined
        resource: String,
        /// Attribute name with the conflicting assignments
        attribute: String,
        /// The reference recorded first
        existing: String,
        /// The reference that disagrees with it
        new: String,
    },

    /// A configuration block could not be rendered as a JSON manifest
    #[error("Failed to convert example block {block} to JSON: {reason}")]
    ConversionFailure {
        /// Composite `type.name` key of the block
        block: String,
        /// Conversion diagnostic
        reason: String,
    },

    /// A stored metadata document could not be deserialized
    #[error("Failed to unmarshal provider metadata from {}: {reason}", path.display())]
    InvalidMetadata {
        /// The metadata file
        path: PathBuf,
        /// Deserialization diagnostic
        reason: String,
    },

    /// Invalid run configuration (selectors, config file, required options)
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Scraping a particular document failed
    #[error("Failed to scrape resource metadata from {}: {source}", path.display())]
    DocumentFailure {
        /// The document being scraped
        path: PathBuf,
        /// What went wrong
        #[source]
        source: Box<ScrapeError>,
    },

    /// Any other failure, already rendered to a message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl ScrapeError {
    /// Wrap this error with the path of the document being scraped.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Self::DocumentFailure {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through [`ScrapeError::DocumentFailure`] wrappers.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::DocumentFailure {
                source,
                ..
            } => source.root(),
            other => other,
        }
    }
}

/// Result alias used by the extraction engine.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Error wrapper with user-facing details and a suggestion
///
/// Produced by [`user_friendly_error`] at the CLI boundary. Details are shown in
/// yellow, suggestions in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ScrapeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without details or suggestion.
    #[must_use]
    pub const fn new(error: ScrapeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// [`ScrapeError`]s get tailored suggestions based on their innermost cause.
/// Anything else is rendered with its full error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<ScrapeError>() {
        Ok(scrape_error) => return create_error_context(scrape_error),
        Err(error) => error,
    };

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ScrapeError::Other {
        message,
    })
}

/// Attach suggestions and details matching the innermost cause of `error`.
fn create_error_context(error: ScrapeError) -> ErrorContext {
    let Some((suggestion, details)) = hint_for(error.root()) else {
        return ErrorContext::new(error);
    };

    let context = ErrorContext::new(error).with_suggestion(suggestion);
    match details {
        Some(details) => context.with_details(details),
        None => context,
    }
}

/// Suggestion and optional details for a root-cause error.
fn hint_for(error: &ScrapeError) -> Option<(String, Option<String>)> {
    let hint = match error {
        ScrapeError::IoFailure {
            source,
            ..
        } => (
            match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists and the path is correct"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check file ownership and permissions of the documentation tree and output path"
                }
                _ => "Check the path and retry",
            }
            .to_string(),
            None,
        ),
        ScrapeError::MalformedPrelude {
            ..
        } => (
            "Make sure the page starts with a frontmatter block declaring page_title and subcategory"
                .to_string(),
            Some(
                "Every discovered document must carry a title and a category; the whole run is aborted otherwise"
                    .to_string(),
            ),
        ),
        ScrapeError::ConfigParseFailure {
            ..
        } => (
            "Fix the example configuration or pass --skip-example-errors to ignore unparsable snippets"
                .to_string(),
            None,
        ),
        ScrapeError::ConflictingReference {
            attribute,
            ..
        } => (
            format!(
                "Make every assignment of '{attribute}' in the example refer to the same target, or pass --skip-example-references"
            ),
            Some("Reference extraction requires a single target per attribute".to_string()),
        ),
        ScrapeError::ConversionFailure {
            ..
        } => ("Check the example block for constructs that cannot be expressed as JSON".to_string(), None),
        ScrapeError::InvalidMetadata {
            ..
        } => ("Regenerate the metadata file by re-running the scraper".to_string(), None),
        ScrapeError::ConfigError {
            ..
        } => (
            "Check the command-line options and the config file; selectors must be valid CSS".to_string(),
            None,
        ),
        ScrapeError::DocumentFailure {
            ..
        }
        | ScrapeError::Other {
            ..
        } => return None,
    };
    Some(hint)
}
