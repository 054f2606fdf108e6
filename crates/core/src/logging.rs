//! Structured logging for the GOST key methods.
//!
//! Key methods emit `tracing` events; this module installs a subscriber for
//! binaries and tests that want to see them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

fn filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the logging system with human readable output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// # Example
/// ```no_run
/// use gostpk_core::logging;
///
/// logging::init();
/// tracing::info!("key methods registered");
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize the logging system with JSON output.
pub fn init_json() {
    tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(fmt::layer().json().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize from configuration. Returns `false` if a global subscriber
/// was already installed.
pub fn init_with(config: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(filter_or(&config.level));
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    };
    if installed {
        tracing::debug!(level = %config.level, json = config.json, "logging initialized");
    }
    installed
}
