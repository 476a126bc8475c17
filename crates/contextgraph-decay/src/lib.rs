pub mod engine;
pub mod factors;
pub mod formula;
pub mod tombstone;

pub use engine::DecayEngine;
pub use factors::DecayContext;
pub use tombstone::TombstoneDecision;
