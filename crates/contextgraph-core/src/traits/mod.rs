//! Collaborator contracts. The engine reads and writes state only through
//! these traits; implementations own all storage and network I/O.

mod collision_source;
mod context;
mod convergence_source;
mod decay_source;
mod drift_source;
mod provenance_source;
mod telemetry;

pub use collision_source::CollisionDataSource;
pub use context::{ContextIndexBuilder, TopicProvider};
pub use convergence_source::ConvergenceDataSource;
pub use decay_source::DecayDataSource;
pub use drift_source::DriftDataSource;
pub use provenance_source::ProvenanceDataSource;
pub use telemetry::TelemetryBackend;
