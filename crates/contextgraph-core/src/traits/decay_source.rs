use async_trait::async_trait;

use crate::errors::GraphResult;
use crate::models::{KnowledgeNode, SchemaEndpoint};

#[async_trait]
pub trait DecayDataSource: Send + Sync {
    async fn list_nodes(&self, branch_name: &str) -> GraphResult<Vec<KnowledgeNode>>;

    async fn list_endpoints(&self) -> GraphResult<Vec<SchemaEndpoint>>;

    /// Tombstone a node. Must tolerate being called for an already-tombstoned node.
    async fn mark_tombstone(&self, node_id: &str) -> GraphResult<()>;
}
