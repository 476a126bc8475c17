use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Author {
    Human,
    Agent,
    System,
}

/// One link of a node's provenance chain: the commit plus who made it and
/// which nodes it converged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    pub node_id: String,
    pub version_hash: String,
    #[serde(default)]
    pub parent_hash: Option<String>,
    pub commit_hash: String,
    pub schema_hash: String,
    pub author: Author,
    pub agent_id: String,
    pub branch_name: String,
    #[serde(default)]
    pub task_contract_ref: Option<String>,
    #[serde(default)]
    pub evidence_refs: Vec<String>,
    #[serde(default)]
    pub convergence_of: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a one-hop ancestry check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub ok: bool,
    pub missing: Vec<String>,
}

impl VerificationResult {
    pub fn verified() -> Self {
        Self {
            ok: true,
            missing: Vec::new(),
        }
    }

    pub fn missing(hash: impl Into<String>) -> Self {
        Self {
            ok: false,
            missing: vec![hash.into()],
        }
    }
}

/// Commits visible on a branch at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpistemicState {
    pub branch_name: String,
    pub at: DateTime<Utc>,
    pub commit_hashes: Vec<String>,
}
