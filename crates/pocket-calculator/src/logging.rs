//! Logging setup for the terminal front end

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Builds the filter: `RUST_LOG` wins, otherwise the configured verbosity
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber, writing to stderr
///
/// Stdout carries the calculator display, so log lines never go there.
pub fn init(verbosity: Verbosity) -> Result<(), String> {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| e.to_string())
}
