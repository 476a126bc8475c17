//! # contextgraph-events
//!
//! The event bus that ties the detectors together: human-required
//! escalations, typed lifecycle events, and the swappable telemetry backend
//! that records every event before any handler sees it.

pub mod bus;
pub mod metrics;
pub mod telemetry;
pub mod tracing_setup;

pub use bus::EventBus;
pub use metrics::MetricsCollector;
pub use telemetry::{
    backend_from_config, CompositeBackend, MemoryBackend, NoopBackend, TracingBackend,
};
