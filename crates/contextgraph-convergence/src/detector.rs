//! ConvergenceDetector: score node pairs and promote independent agreement.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use contextgraph_convergence::ConvergenceDetector;
//! # fn source() -> Arc<dyn contextgraph_core::traits::ConvergenceDataSource> { unimplemented!() }
//!
//! let detector = ConvergenceDetector::new(source());
//! // let candidates = detector.scan("auth").await?;
//! ```

use std::sync::Arc;

use tracing::{debug, info, instrument};

use contextgraph_core::config::ConvergenceConfig;
use contextgraph_core::constants::UNKNOWN;
use contextgraph_core::errors::{ConvergenceError, GraphResult};
use contextgraph_core::models::{CanonicalNode, ConvergenceCandidate, ConvergenceScore, KnowledgeNode};
use contextgraph_core::traits::ConvergenceDataSource;
use contextgraph_events::telemetry::ConvergencePromoteAttributes;
use contextgraph_events::EventBus;

use crate::scoring;

pub struct ConvergenceDetector {
    source: Arc<dyn ConvergenceDataSource>,
    config: ConvergenceConfig,
    events: Option<Arc<EventBus>>,
}

impl ConvergenceDetector {
    pub fn new(source: Arc<dyn ConvergenceDataSource>) -> Self {
        Self {
            source,
            config: ConvergenceConfig::default(),
            events: None,
        }
    }

    pub fn with_config(mut self, config: ConvergenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn compute_score(&self, a: &KnowledgeNode, b: &KnowledgeNode) -> ConvergenceScore {
        scoring::compute_score(a, b)
    }

    /// Whether a score clears both promotion thresholds: combined strictly
    /// above `promotion_threshold` and independence at least `min_independence`.
    pub fn is_promotable(&self, score: &ConvergenceScore) -> bool {
        score.combined > self.config.promotion_threshold
            && score.temporal >= self.config.min_independence
    }

    /// Every unordered pair of nodes on `topic`, with its score.
    #[instrument(name = "contextgraph.convergence.scan", skip(self))]
    pub async fn scan(&self, topic: &str) -> GraphResult<Vec<ConvergenceCandidate>> {
        let nodes = self.source.list_nodes_by_topic(topic).await?;

        let mut candidates = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                candidates.push(ConvergenceCandidate {
                    node_a: a.clone(),
                    node_b: b.clone(),
                    score: scoring::compute_score(a, b),
                });
            }
        }
        debug!(nodes = nodes.len(), pairs = candidates.len(), "convergence scan");
        Ok(candidates)
    }

    /// Promote `nodes` to a canonical node.
    ///
    /// Only the first two nodes are scored; the rest ride along as sources.
    /// The data source may build the canonical record; otherwise it is taken
    /// from the first node.
    #[instrument(name = "contextgraph.convergence.promote", skip(self, nodes), fields(count = nodes.len()))]
    pub async fn promote(&self, nodes: &[KnowledgeNode]) -> GraphResult<CanonicalNode> {
        let [first, second, ..] = nodes else {
            return Err(ConvergenceError::InsufficientNodes { count: nodes.len() }.into());
        };

        let score = scoring::compute_score(first, second);
        if !self.is_promotable(&score) {
            return Err(ConvergenceError::ThresholdNotMet {
                combined: score.combined,
                independence: score.temporal,
            }
            .into());
        }

        let canonical = match self.source.promote_canonical(nodes).await? {
            Some(canonical) => canonical,
            None => CanonicalNode {
                topic: first.topic.clone(),
                claim: first.claim.clone(),
                version_hash: first.version_hash.clone(),
                sources: nodes.iter().map(|n| n.id.clone()).collect(),
            },
        };

        let contributing_agents = contributing_agents(nodes);
        info!(
            topic = %first.topic,
            combined = score.combined,
            agents = ?contributing_agents,
            "knowledge promoted to canonical"
        );
        if let Some(bus) = &self.events {
            bus.report(ConvergencePromoteAttributes {
                topic: first.topic.clone(),
                contributing_agents,
                convergence_score: score.combined,
            })
            .await;
        }
        Ok(canonical)
    }
}

/// Distinct agent ids in node order; nodes without one count as `"unknown"`.
fn contributing_agents(nodes: &[KnowledgeNode]) -> Vec<String> {
    let mut agents: Vec<String> = Vec::new();
    for node in nodes {
        let agent = node.agent_id().unwrap_or(UNKNOWN);
        if !agents.iter().any(|a| a == agent) {
            agents.push(agent.to_string());
        }
    }
    agents
}
