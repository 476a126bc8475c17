//! Telemetry backends and typed attribute records.

pub mod attributes;
mod composite;
mod memory;
mod noop;
mod tracing_backend;

pub use attributes::{
    CollisionResolveAttributes, CommitKnowledgeAttributes, ConvergencePromoteAttributes,
    DecayScanAttributes, DriftDetectAttributes, SessionResumeAttributes,
};
pub use composite::CompositeBackend;
pub use memory::MemoryBackend;
pub use noop::NoopBackend;
pub use tracing_backend::TracingBackend;

use std::sync::Arc;

use contextgraph_core::config::{TelemetryBackendKind, TelemetryConfig};
use contextgraph_core::traits::TelemetryBackend;

/// Build the backend named in config.
pub fn backend_from_config(config: &TelemetryConfig) -> Arc<dyn TelemetryBackend> {
    match config.backend {
        TelemetryBackendKind::Noop => Arc::new(NoopBackend),
        TelemetryBackendKind::Tracing => Arc::new(TracingBackend),
        TelemetryBackendKind::Memory => Arc::new(MemoryBackend::new(config.memory_capacity)),
    }
}
