use serde::{Deserialize, Serialize};

use super::defaults;

/// Which built-in telemetry backend to install at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryBackendKind {
    /// Discard every event.
    #[default]
    Noop,
    /// Log every event through `tracing`.
    Tracing,
    /// Keep the most recent events in memory.
    Memory,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub backend: TelemetryBackendKind,
    /// Ring capacity for the memory backend.
    pub memory_capacity: usize,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            backend: TelemetryBackendKind::default(),
            memory_capacity: defaults::DEFAULT_MEMORY_TELEMETRY_CAPACITY,
        }
    }
}
