mod branch;
mod collision;
mod commit;
mod context_index;
mod convergence;
mod decay;
mod drift;
mod engine_reports;
mod events;
mod knowledge_node;
mod provenance;
mod schema_endpoint;
mod score;

pub use branch::{Branch, BranchStatus};
pub use collision::{
    Collision, CollisionClass, CollisionKind, RawCollision, Resolution, ResolutionStrategy,
};
pub use commit::MemoryCommit;
pub use context_index::{ContextIndexOutput, ContextIndexPayload, EndpointSummary};
pub use convergence::{CanonicalNode, ConvergenceCandidate, ConvergenceScore};
pub use decay::{DecayReport, DecayScore, NodeDecay};
pub use drift::{DriftEvent, DriftSeverity, RemediationPolicy, RemediationResult, TypeMap, TypeMapPair};
pub use engine_reports::{MaintenanceReport, MergeResult, MergeStatus};
pub use events::{EngineEvent, EngineEventType, HumanRequiredEvent, TelemetryEvent};
pub use knowledge_node::{KnowledgeNode, NodeMetadata};
pub use provenance::{Author, EpistemicState, ProvenanceEntry, VerificationResult};
pub use schema_endpoint::SchemaEndpoint;
pub use score::{clamp_unit, round_score};
