//! Log subscriber setup.
//!
//! Logs go to stderr so stdout carries only responses.

use tracing_subscriber::EnvFilter;
use valuetable_foundation::{Error, ErrorKind, Result};

use crate::config::DEFAULT_LOG_FILTER;

/// Builds the log filter.
///
/// An explicit filter wins over `RUST_LOG`, which wins over
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
/// Returns an `Internal` error if the explicit filter is malformed.
pub fn env_filter(explicit: Option<&str>) -> Result<EnvFilter> {
    match explicit {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "invalid log filter '{directives}': {e}"
            )))
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Installs the global fmt subscriber.
///
/// # Errors
/// Returns an `Internal` error if the filter is malformed or a global
/// subscriber is already installed.
pub fn init_logging(explicit: Option<&str>) -> Result<()> {
    let filter = env_filter(explicit)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("cannot install logger: {e}"))))
}
