//! Tracing subscriber setup
//!
//! The filter comes from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;
use weekplan_domain::{Result, WeekplanError};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global `fmt` subscriber, as JSON lines when `json` is set
///
/// # Errors
/// Returns `WeekplanError::Internal` if a global subscriber is already
/// installed.
pub fn init_tracing(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    installed.map_err(|error| {
        WeekplanError::Internal(format!("failed to initialize tracing subscriber: {error}"))
    })
}
