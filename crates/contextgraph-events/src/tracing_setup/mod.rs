//! Subscriber initialisation and span helpers.

pub mod spans;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use contextgraph_core::config::ObservabilityConfig;
use contextgraph_core::errors::{GraphError, GraphResult};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init(config: &ObservabilityConfig) -> GraphResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| GraphError::ConfigError(format!("invalid log_level: {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_logs {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
