use async_trait::async_trait;

use crate::errors::GraphResult;
use crate::models::{CanonicalNode, KnowledgeNode};

#[async_trait]
pub trait ConvergenceDataSource: Send + Sync {
    async fn list_nodes_by_topic(&self, topic: &str) -> GraphResult<Vec<KnowledgeNode>>;

    /// Build (and typically persist) the canonical node for a promotion.
    /// Returning `None` lets the detector construct the default record.
    async fn promote_canonical(&self, _nodes: &[KnowledgeNode]) -> GraphResult<Option<CanonicalNode>> {
        Ok(None)
    }
}
