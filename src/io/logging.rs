//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_LOG_FILTER, TRACE_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::io::error::{Result, invalid_parameter};

/// Filter directive for a `-v` count
pub const fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => VERBOSE_LOG_FILTER,
        _ => TRACE_LOG_FILTER,
    }
}

/// Build the event filter, preferring `RUST_LOG` over the verbosity default
///
/// # Errors
///
/// Returns `InvalidParameter` if the fallback directive cannot be parsed
pub fn build_filter(verbosity: u8) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        let directive = filter_for_verbosity(verbosity);
        EnvFilter::try_new(directive)
            .map_err(|error| invalid_parameter("verbosity", &directive, &error))
    })
}

/// Install a formatted subscriber writing to stderr
///
/// # Errors
///
/// Returns `InvalidParameter` if the filter is invalid or a global subscriber
/// is already installed
pub fn init(verbosity: u8) -> Result<()> {
    let filter = build_filter(verbosity)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|error| invalid_parameter("subscriber", &"fmt", &error))
}
