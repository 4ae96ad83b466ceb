//! Logging initialization for the command-line interface.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level selected by the verbosity flags.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags when it is set.
/// Installing twice (e.g. when the CLI is driven from tests) keeps the first
/// subscriber.
pub fn initialize_logging(verbose: bool, quiet: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(level_for(verbose, quiet).to_string()),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init();
}
