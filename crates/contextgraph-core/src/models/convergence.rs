use serde::{Deserialize, Serialize};

use super::KnowledgeNode;

/// Agreement score between two knowledge nodes. Every component lies in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceScore {
    pub structural: f64,
    pub evidential: f64,
    /// Independence of the two sources (historically named "temporal").
    pub temporal: f64,
    /// Weighted sum, rounded to 4 decimal places.
    pub combined: f64,
}

/// A scored pair of nodes on the same topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceCandidate {
    pub node_a: KnowledgeNode,
    pub node_b: KnowledgeNode,
    pub score: ConvergenceScore,
}

/// Canonical node produced by promotion. `sources` lists the original node ids,
/// which are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalNode {
    pub topic: String,
    pub claim: String,
    pub version_hash: String,
    pub sources: Vec<String>,
}
