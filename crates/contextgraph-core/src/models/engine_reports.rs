use serde::{Deserialize, Serialize};

use super::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeStatus {
    Merged,
    Blocked,
}

/// Aggregate decision for a merge attempt.
///
/// `Merged` is a decision only; applying the resolutions to storage happens
/// outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub status: MergeStatus,
    pub requires_human: bool,
    pub resolutions: Vec<Resolution>,
}

impl MergeResult {
    /// Any resolution requiring a human blocks the whole merge.
    pub fn from_resolutions(resolutions: Vec<Resolution>) -> Self {
        let requires_human = resolutions.iter().any(|r| r.requires_human);
        Self {
            status: if requires_human {
                MergeStatus::Blocked
            } else {
                MergeStatus::Merged
            },
            requires_human,
            resolutions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    pub branch_name: String,
    pub decay_scanned: usize,
    pub tombstoned: usize,
    pub convergence_promotions: usize,
}
