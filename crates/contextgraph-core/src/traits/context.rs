use async_trait::async_trait;

use crate::errors::GraphResult;
use crate::models::ContextIndexOutput;

/// Builds the context index an agent receives on session resume.
#[async_trait]
pub trait ContextIndexBuilder: Send + Sync {
    async fn build(&self, agent_id: &str, branch_name: &str) -> GraphResult<ContextIndexOutput>;
}

/// Lists the topics maintenance should check for convergence.
#[async_trait]
pub trait TopicProvider: Send + Sync {
    async fn topics(&self, branch_name: &str) -> GraphResult<Vec<String>>;
}
