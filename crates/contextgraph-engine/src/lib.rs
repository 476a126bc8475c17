//! # contextgraph-engine
//!
//! The orchestrator. It is the only component that knows about all five
//! detectors; detectors never call one another.
//!
//! Construct one [`EventBus`](contextgraph_events::EventBus) at process
//! start, hand the same `Arc` to [`ContextGraphEngine::from_sources`], and
//! register human-required handlers on it.

pub mod context_index;
pub mod defaults;
pub mod engine;

pub use context_index::{build_payload, estimate_tokens, serialize_context_index, SkillRef};
pub use engine::{ContextGraphEngine, DataSources};
