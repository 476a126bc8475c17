//! Collaborators used when the caller does not supply one.

use async_trait::async_trait;

use contextgraph_core::config::ContextIndexConfig;
use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::ContextIndexOutput;
use contextgraph_core::traits::{ContextIndexBuilder, TopicProvider};

use crate::context_index::build_payload;

/// An empty payload naming only the agent and branch: genesis head, no
/// endpoints, no skills, no knowledge.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalContextIndex;

#[async_trait]
impl ContextIndexBuilder for MinimalContextIndex {
    async fn build(&self, agent_id: &str, branch_name: &str) -> GraphResult<ContextIndexOutput> {
        let payload = build_payload(
            agent_id,
            branch_name,
            None,
            &[],
            &[],
            0,
            &ContextIndexConfig::default(),
        );
        Ok(serde_json::to_value(payload)?.into())
    }
}

/// Provides no topics, so maintenance runs decay only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTopics;

#[async_trait]
impl TopicProvider for NoTopics {
    async fn topics(&self, _branch_name: &str) -> GraphResult<Vec<String>> {
        Ok(Vec::new())
    }
}
