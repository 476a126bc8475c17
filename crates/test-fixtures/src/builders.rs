use chrono::{DateTime, Duration, Utc};

use contextgraph_core::models::{Author, KnowledgeNode, NodeMetadata, ProvenanceEntry};

/// Start building a knowledge node.
pub fn node(id: &str, topic: &str, claim: &str) -> NodeBuilder {
    NodeBuilder {
        node: KnowledgeNode {
            id: id.to_string(),
            commit_hash: format!("commit-{id}"),
            topic: topic.to_string(),
            claim: claim.to_string(),
            version_hash: format!("v-{id}"),
            parent_hash: None,
            isomorphisms: Vec::new(),
            metadata: NodeMetadata::default(),
            tombstoned: false,
        },
    }
}

#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: KnowledgeNode,
}

impl NodeBuilder {
    pub fn agent(mut self, agent_id: &str) -> Self {
        self.node.metadata.agent_id = Some(agent_id.to_string());
        self
    }

    pub fn evidence(mut self, refs: &[&str]) -> Self {
        self.node
            .metadata
            .evidence_refs
            .extend(refs.iter().map(|r| r.to_string()));
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.node.metadata.confidence = Some(confidence);
        self
    }

    pub fn verified_at(mut self, at: DateTime<Utc>) -> Self {
        self.node.metadata.last_verified_at = Some(at);
        self
    }

    pub fn verified_days_ago(self, now: DateTime<Utc>, days: i64) -> Self {
        self.verified_at(now - Duration::days(days))
    }

    pub fn isomorphism(mut self, value: serde_json::Value) -> Self {
        self.node.isomorphisms.push(value);
        self
    }

    pub fn version_hash(mut self, hash: &str) -> Self {
        self.node.version_hash = hash.to_string();
        self
    }

    pub fn tombstoned(mut self) -> Self {
        self.node.tombstoned = true;
        self
    }

    pub fn build(self) -> KnowledgeNode {
        self.node
    }
}

/// A provenance entry on `main`, authored by an agent.
pub fn provenance_entry(
    node_id: &str,
    commit_hash: &str,
    parent_hash: Option<&str>,
    created_at: DateTime<Utc>,
) -> ProvenanceEntry {
    ProvenanceEntry {
        node_id: node_id.to_string(),
        version_hash: format!("v-{commit_hash}"),
        parent_hash: parent_hash.map(str::to_string),
        commit_hash: commit_hash.to_string(),
        schema_hash: "schema-1".to_string(),
        author: Author::Agent,
        agent_id: "agent-1".to_string(),
        branch_name: "main".to_string(),
        task_contract_ref: None,
        evidence_refs: Vec::new(),
        convergence_of: Vec::new(),
        created_at,
    }
}
