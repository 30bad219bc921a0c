//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tillit_core::config::ObservabilityConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "TILLIT_LOG";

static INIT: Once = Once::new();

fn filter_for(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// `TILLIT_LOG` takes precedence over `config.log_level`; output is JSON lines
/// when `config.json` is set. Calling it more than once is safe, and a
/// subscriber installed by the host application is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let _ = try_install(filter_for(config), config.json);
    });
}

/// Install the global subscriber with an explicit filter (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    INIT.call_once(|| {
        let _ = try_install(EnvFilter::new(filter), json);
    });
}

/// Like [`init_tracing`], but reports an already-installed subscriber.
pub fn try_init_tracing(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    try_install(filter_for(config), config.json)
}

fn try_install(filter: EnvFilter, json: bool) -> Result<(), TryInitError> {
    use tracing_subscriber::prelude::*;

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    }
}
