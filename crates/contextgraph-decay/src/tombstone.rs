use contextgraph_core::models::{DecayScore, KnowledgeNode};

/// Whether a combined decay score crosses the tombstone threshold.
pub fn should_tombstone(combined: f64, threshold: f64) -> bool {
    combined >= threshold
}

/// Tombstone decision with metadata for audit logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TombstoneDecision {
    pub node_id: String,
    pub should_tombstone: bool,
    pub combined: f64,
    pub reason: String,
}

/// Decide whether a scan must tombstone `node`. Nodes storage already
/// tombstoned are skipped, which keeps repeated scans idempotent.
pub fn evaluate(node: &KnowledgeNode, score: &DecayScore) -> TombstoneDecision {
    let (should_tombstone, reason) = if node.tombstoned {
        (false, "already tombstoned".to_string())
    } else if score.tombstone {
        (true, format!("decay {:.4} at or above threshold", score.combined))
    } else {
        (false, "decay below threshold".to_string())
    };

    TombstoneDecision {
        node_id: node.id.clone(),
        should_tombstone,
        combined: score.combined,
        reason,
    }
}
