use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use contextgraph_core::config::DecayConfig;
use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{DecayReport, DecayScore, KnowledgeNode, NodeDecay, SchemaEndpoint};
use contextgraph_core::traits::DecayDataSource;
use contextgraph_events::telemetry::DecayScanAttributes;
use contextgraph_events::EventBus;

use crate::factors::DecayContext;
use crate::formula;
use crate::tombstone::{self, TombstoneDecision};

/// Scores knowledge staleness and tombstones nodes past the threshold.
pub struct DecayEngine {
    source: Arc<dyn DecayDataSource>,
    config: DecayConfig,
    events: Option<Arc<EventBus>>,
}

impl DecayEngine {
    pub fn new(source: Arc<dyn DecayDataSource>) -> Self {
        Self {
            source,
            config: DecayConfig::default(),
            events: None,
        }
    }

    pub fn with_config(mut self, config: DecayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Pure score for one node. Deterministic for a fixed `ctx.now`.
    pub fn compute_score(&self, node: &KnowledgeNode, ctx: &DecayContext) -> DecayScore {
        formula::compute(node, ctx, &self.config)
    }

    pub fn evaluate_tombstone(&self, node: &KnowledgeNode, score: &DecayScore) -> TombstoneDecision {
        tombstone::evaluate(node, score)
    }

    /// Score every node on `branch_name` as of now.
    pub async fn scan(&self, branch_name: &str) -> GraphResult<DecayReport> {
        self.scan_at(branch_name, Utc::now()).await
    }

    /// Score every node on `branch_name` as of `now`, tombstoning each node
    /// over the threshold that storage has not tombstoned yet.
    ///
    /// Only the first endpoint from the data source is used as context.
    #[instrument(name = "contextgraph.decay.scan", skip(self))]
    pub async fn scan_at(&self, branch_name: &str, now: DateTime<Utc>) -> GraphResult<DecayReport> {
        let nodes = self.source.list_nodes(branch_name).await?;
        let endpoint = self
            .source
            .list_endpoints()
            .await?
            .into_iter()
            .next()
            .unwrap_or_else(SchemaEndpoint::unknown);
        let ctx = DecayContext::new(now, endpoint);

        let mut scores = Vec::with_capacity(nodes.len());
        let mut tombstoned = 0;
        for node in &nodes {
            let score = self.compute_score(node, &ctx);
            let decision = tombstone::evaluate(node, &score);
            if decision.should_tombstone {
                self.source.mark_tombstone(&node.id).await?;
                tombstoned += 1;
                debug!(node_id = %node.id, reason = %decision.reason, "node tombstoned");
            }
            scores.push(NodeDecay {
                node_id: node.id.clone(),
                score,
            });
        }

        let report = DecayReport {
            branch_name: branch_name.to_string(),
            scanned: nodes.len(),
            tombstoned,
            scores,
        };
        info!(
            endpoint_id = %ctx.endpoint.id,
            scanned = report.scanned,
            tombstoned = report.tombstoned,
            "decay scan complete"
        );

        if let Some(bus) = &self.events {
            bus.report(DecayScanAttributes {
                branch_name: report.branch_name.clone(),
                nodes_scanned: report.scanned,
                nodes_tombstoned: report.tombstoned,
            })
            .await;
        }
        Ok(report)
    }
}
