use chrono::{DateTime, Utc};

use contextgraph_core::models::KnowledgeNode;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Temporal decay: `min(1, daysSinceVerified / horizon)`.
///
/// A node that was never verified is fully decayed. Verification timestamps
/// in the future count as age zero.
pub fn calculate(node: &KnowledgeNode, now: DateTime<Utc>, horizon_days: f64) -> f64 {
    let Some(verified_at) = node.metadata.last_verified_at else {
        return 1.0;
    };
    if horizon_days <= 0.0 {
        return 1.0;
    }
    let age_days = (now - verified_at).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    (age_days / horizon_days).min(1.0)
}
