//! In-memory implementations of every collaborator trait.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use contextgraph_core::errors::{GraphError, GraphResult};
use contextgraph_core::models::{
    CanonicalNode, Collision, ContextIndexOutput, DriftSeverity, KnowledgeNode, ProvenanceEntry,
    SchemaEndpoint, TypeMapPair,
};
use contextgraph_core::traits::{
    CollisionDataSource, ContextIndexBuilder, ConvergenceDataSource, DecayDataSource,
    DriftDataSource, ProvenanceDataSource, TopicProvider,
};

#[derive(Debug, Default)]
pub struct InMemoryDriftSource {
    maps: HashMap<String, TypeMapPair>,
    updates: Mutex<Vec<(String, DriftSeverity)>>,
}

impl InMemoryDriftSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pair(mut self, endpoint_id: &str, pair: TypeMapPair) -> Self {
        self.maps.insert(endpoint_id.to_string(), pair);
        self
    }

    /// Every `update_endpoint` call, in order.
    pub fn updates(&self) -> Vec<(String, DriftSeverity)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl DriftDataSource for InMemoryDriftSource {
    async fn load_type_map(&self, endpoint_id: &str) -> GraphResult<TypeMapPair> {
        self.maps
            .get(endpoint_id)
            .cloned()
            .ok_or_else(|| GraphError::data_source("drift", format!("no type map for {endpoint_id}")))
    }

    async fn update_endpoint(&self, endpoint_id: &str, severity: DriftSeverity) -> GraphResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((endpoint_id.to_string(), severity));
        Ok(())
    }
}

/// Relies on the default no-op `update_endpoint`.
#[derive(Debug, Default)]
pub struct ReadOnlyDriftSource(pub TypeMapPair);

#[async_trait]
impl DriftDataSource for ReadOnlyDriftSource {
    async fn load_type_map(&self, _endpoint_id: &str) -> GraphResult<TypeMapPair> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCollisionSource {
    collisions: Vec<Collision>,
    requests: Mutex<Vec<(String, String)>>,
}

impl InMemoryCollisionSource {
    pub fn new(collisions: Vec<Collision>) -> Self {
        Self {
            collisions,
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CollisionDataSource for InMemoryCollisionSource {
    async fn list_collisions(&self, branch_a: &str, branch_b: &str) -> GraphResult<Vec<Collision>> {
        self.requests
            .lock()
            .unwrap()
            .push((branch_a.to_string(), branch_b.to_string()));
        Ok(self.collisions.clone())
    }
}

/// Nodes are kept per store, not per branch; `mark_tombstone` flips the
/// node's `tombstoned` flag like storage would.
#[derive(Debug, Default)]
pub struct InMemoryDecaySource {
    nodes: Mutex<Vec<KnowledgeNode>>,
    endpoints: Vec<SchemaEndpoint>,
    tombstone_calls: Mutex<Vec<String>>,
}

impl InMemoryDecaySource {
    pub fn new(nodes: Vec<KnowledgeNode>) -> Self {
        Self {
            nodes: Mutex::new(nodes),
            ..Self::default()
        }
    }

    pub fn with_endpoints(mut self, endpoints: Vec<SchemaEndpoint>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn tombstone_calls(&self) -> Vec<String> {
        self.tombstone_calls.lock().unwrap().clone()
    }

    pub fn nodes(&self) -> Vec<KnowledgeNode> {
        self.nodes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DecayDataSource for InMemoryDecaySource {
    async fn list_nodes(&self, _branch_name: &str) -> GraphResult<Vec<KnowledgeNode>> {
        Ok(self.nodes())
    }

    async fn list_endpoints(&self) -> GraphResult<Vec<SchemaEndpoint>> {
        Ok(self.endpoints.clone())
    }

    async fn mark_tombstone(&self, node_id: &str) -> GraphResult<()> {
        self.tombstone_calls.lock().unwrap().push(node_id.to_string());
        let mut nodes = self.nodes.lock().unwrap();
        match nodes.iter_mut().find(|n| n.id == node_id) {
            Some(node) => {
                node.tombstoned = true;
                Ok(())
            }
            None => Err(GraphError::NodeNotFound {
                id: node_id.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryConvergenceSource {
    nodes: Vec<KnowledgeNode>,
    canonical: Option<CanonicalNode>,
    promotions: Mutex<Vec<Vec<String>>>,
}

impl InMemoryConvergenceSource {
    pub fn new(nodes: Vec<KnowledgeNode>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    /// Make `promote_canonical` return this record instead of `None`.
    pub fn with_canonical(mut self, canonical: CanonicalNode) -> Self {
        self.canonical = Some(canonical);
        self
    }

    /// Node ids passed to each `promote_canonical` call.
    pub fn promotions(&self) -> Vec<Vec<String>> {
        self.promotions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConvergenceDataSource for InMemoryConvergenceSource {
    async fn list_nodes_by_topic(&self, topic: &str) -> GraphResult<Vec<KnowledgeNode>> {
        Ok(self
            .nodes
            .iter()
            .filter(|n| n.topic == topic)
            .cloned()
            .collect())
    }

    async fn promote_canonical(&self, nodes: &[KnowledgeNode]) -> GraphResult<Option<CanonicalNode>> {
        self.promotions
            .lock()
            .unwrap()
            .push(nodes.iter().map(|n| n.id.clone()).collect());
        Ok(self.canonical.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProvenanceSource {
    entries: Vec<ProvenanceEntry>,
}

impl InMemoryProvenanceSource {
    pub fn new(entries: Vec<ProvenanceEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ProvenanceDataSource for InMemoryProvenanceSource {
    async fn get_chain(&self, node_id: &str) -> GraphResult<Vec<ProvenanceEntry>> {
        let mut chain: Vec<ProvenanceEntry> = self
            .entries
            .iter()
            .filter(|e| e.node_id == node_id)
            .cloned()
            .collect();
        chain.sort_by_key(|e| e.created_at);
        Ok(chain)
    }

    async fn get_commit(&self, commit_hash: &str) -> GraphResult<Option<ProvenanceEntry>> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.commit_hash == commit_hash)
            .cloned())
    }

    async fn list_commits_before(&self, branch_name: &str, at: DateTime<Utc>) -> GraphResult<Vec<String>> {
        let mut visible: Vec<&ProvenanceEntry> = self
            .entries
            .iter()
            .filter(|e| e.branch_name == branch_name && e.created_at <= at)
            .collect();
        visible.sort_by_key(|e| e.created_at);
        let mut hashes: Vec<String> = Vec::new();
        for entry in visible {
            if !hashes.contains(&entry.commit_hash) {
                hashes.push(entry.commit_hash.clone());
            }
        }
        Ok(hashes)
    }
}

/// Every call fails with [`GraphError::DataSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl FailingSource {
    fn fail<T>() -> GraphResult<T> {
        Err(GraphError::data_source("failing", "connection refused"))
    }
}

#[async_trait]
impl DriftDataSource for FailingSource {
    async fn load_type_map(&self, _endpoint_id: &str) -> GraphResult<TypeMapPair> {
        Self::fail()
    }
}

#[async_trait]
impl CollisionDataSource for FailingSource {
    async fn list_collisions(&self, _a: &str, _b: &str) -> GraphResult<Vec<Collision>> {
        Self::fail()
    }
}

#[async_trait]
impl DecayDataSource for FailingSource {
    async fn list_nodes(&self, _branch_name: &str) -> GraphResult<Vec<KnowledgeNode>> {
        Self::fail()
    }

    async fn list_endpoints(&self) -> GraphResult<Vec<SchemaEndpoint>> {
        Self::fail()
    }

    async fn mark_tombstone(&self, _node_id: &str) -> GraphResult<()> {
        Self::fail()
    }
}

#[async_trait]
impl ConvergenceDataSource for FailingSource {
    async fn list_nodes_by_topic(&self, _topic: &str) -> GraphResult<Vec<KnowledgeNode>> {
        Self::fail()
    }
}

#[async_trait]
impl ProvenanceDataSource for FailingSource {
    async fn get_chain(&self, _node_id: &str) -> GraphResult<Vec<ProvenanceEntry>> {
        Self::fail()
    }

    async fn get_commit(&self, _commit_hash: &str) -> GraphResult<Option<ProvenanceEntry>> {
        Self::fail()
    }

    async fn list_commits_before(&self, _branch: &str, _at: DateTime<Utc>) -> GraphResult<Vec<String>> {
        Self::fail()
    }
}

#[async_trait]
impl ContextIndexBuilder for FailingSource {
    async fn build(&self, _agent_id: &str, _branch_name: &str) -> GraphResult<ContextIndexOutput> {
        Self::fail()
    }
}

/// Returns the same output for every agent and branch.
#[derive(Debug, Clone)]
pub struct StaticContextBuilder(pub ContextIndexOutput);

#[async_trait]
impl ContextIndexBuilder for StaticContextBuilder {
    async fn build(&self, _agent_id: &str, _branch_name: &str) -> GraphResult<ContextIndexOutput> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticTopics(pub Vec<String>);

#[async_trait]
impl TopicProvider for StaticTopics {
    async fn topics(&self, _branch_name: &str) -> GraphResult<Vec<String>> {
        Ok(self.0.clone())
    }
}
