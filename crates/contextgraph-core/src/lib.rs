//! # contextgraph-core
//!
//! Foundation crate for the ContextGraph decision engine.
//! Defines the knowledge-base models, collaborator traits, errors, config,
//! and scoring constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ContextGraphConfig;
pub use errors::{GraphError, GraphResult};
pub use models::{Collision, CollisionKind, DriftSeverity, KnowledgeNode, SchemaEndpoint};
