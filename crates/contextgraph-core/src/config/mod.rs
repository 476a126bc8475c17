//! Engine configuration, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`].

mod context_index_config;
mod convergence_config;
mod decay_config;
pub mod defaults;
mod observability_config;
mod telemetry_config;

pub use context_index_config::ContextIndexConfig;
pub use convergence_config::ConvergenceConfig;
pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use telemetry_config::{TelemetryBackendKind, TelemetryConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, GraphResult};

/// Root configuration for the decision engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextGraphConfig {
    pub decay: DecayConfig,
    pub convergence: ConvergenceConfig,
    pub context_index: ContextIndexConfig,
    pub telemetry: TelemetryConfig,
    pub observability: ObservabilityConfig,
}

impl ContextGraphConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(source: &str) -> GraphResult<Self> {
        toml::from_str(source).map_err(|e| GraphError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string(self).map_err(|e| GraphError::ConfigError(e.to_string()))
    }
}
