use serde::{Deserialize, Serialize};

/// Per-node staleness score. Every component lies in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayScore {
    pub temporal: f64,
    pub structural: f64,
    pub empirical: f64,
    /// Weighted sum, rounded to 4 decimal places.
    pub combined: f64,
    pub tombstone: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDecay {
    pub node_id: String,
    pub score: DecayScore,
}

/// Result of a decay scan over one branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayReport {
    pub branch_name: String,
    pub scanned: usize,
    /// Nodes newly tombstoned by this scan.
    pub tombstoned: usize,
    pub scores: Vec<NodeDecay>,
}
