//! Tracing subscriber bootstrap.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from logging configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level. Calling this more than once is a no-op beyond the first call.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            let _ = fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .try_init();
        }
        _ => {
            let _ = fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .try_init();
        }
    }
}
