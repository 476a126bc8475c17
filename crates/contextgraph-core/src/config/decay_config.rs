use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Combined decay at or above which nodes are tombstoned.
    pub tombstone_threshold: f64,
    /// Age in days at which temporal decay saturates.
    pub temporal_horizon_days: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            tombstone_threshold: defaults::DEFAULT_TOMBSTONE_THRESHOLD,
            temporal_horizon_days: defaults::DEFAULT_TEMPORAL_HORIZON_DAYS,
        }
    }
}
