use serde::{Deserialize, Serialize};

use super::defaults;

/// Shape and budget of the context index pushed to agents on session resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextIndexConfig {
    /// Estimated token budget for the serialized index.
    pub max_tokens: usize,
    /// Include the live skill index.
    pub include_skill_index: bool,
    /// Include per-endpoint drift status.
    pub include_drift_status: bool,
}

impl Default for ContextIndexConfig {
    fn default() -> Self {
        Self {
            max_tokens: defaults::DEFAULT_CONTEXT_MAX_TOKENS,
            include_skill_index: true,
            include_drift_status: true,
        }
    }
}
