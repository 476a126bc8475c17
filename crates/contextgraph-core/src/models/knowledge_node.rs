use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent-supplied metadata attached to every knowledge node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMetadata {
    /// Agent that asserted the claim.
    pub agent_id: Option<String>,
    /// References to the evidence backing the claim.
    pub evidence_refs: BTreeSet<String>,
    /// Self-reported confidence in [0.0, 1.0].
    pub confidence: Option<f64>,
    /// Last time the claim was checked against its evidence.
    pub last_verified_at: Option<DateTime<Utc>>,
}

/// A single claim in the knowledge graph.
///
/// Append-only: a superseded node is tombstoned and a new node references the
/// old one through `parent_hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    /// Commit that introduced this node.
    pub commit_hash: String,
    pub topic: String,
    pub claim: String,
    pub version_hash: String,
    #[serde(default)]
    pub parent_hash: Option<String>,
    /// Structural corroborations; opaque to the engine.
    #[serde(default)]
    pub isomorphisms: Vec<serde_json::Value>,
    #[serde(default)]
    pub metadata: NodeMetadata,
    /// Set by storage once the node has been tombstoned.
    #[serde(default)]
    pub tombstoned: bool,
}

impl KnowledgeNode {
    /// The asserting agent, ignoring empty ids.
    pub fn agent_id(&self) -> Option<&str> {
        self.metadata
            .agent_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Whether at least one isomorphism corroborates this node.
    pub fn is_corroborated(&self) -> bool {
        !self.isomorphisms.is_empty()
    }
}
