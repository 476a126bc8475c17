use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, Instrument, Span};

use contextgraph_collision::CollisionDetector;
use contextgraph_convergence::{best_candidate, ConvergenceDetector};
use contextgraph_core::config::{ContextGraphConfig, ContextIndexConfig};
use contextgraph_core::errors::{GraphError, GraphResult};
use contextgraph_core::models::{
    Author, ContextIndexOutput, ContextIndexPayload, KnowledgeNode, MaintenanceReport, MergeResult,
    RemediationResult,
};
use contextgraph_core::traits::{
    CollisionDataSource, ContextIndexBuilder, ConvergenceDataSource, DecayDataSource,
    DriftDataSource, ProvenanceDataSource, TopicProvider,
};
use contextgraph_decay::DecayEngine;
use contextgraph_drift::DriftDetector;
use contextgraph_events::telemetry::{CommitKnowledgeAttributes, SessionResumeAttributes};
use contextgraph_events::{maintenance_span, merge_span, session_resume_span, EventBus};
use contextgraph_provenance::ProvenanceTracker;

use crate::context_index::{estimate_tokens, serialize_context_index};
use crate::defaults::{MinimalContextIndex, NoTopics};

/// One data source per detector.
#[derive(Clone)]
pub struct DataSources {
    pub drift: Arc<dyn DriftDataSource>,
    pub collision: Arc<dyn CollisionDataSource>,
    pub decay: Arc<dyn DecayDataSource>,
    pub convergence: Arc<dyn ConvergenceDataSource>,
    pub provenance: Arc<dyn ProvenanceDataSource>,
}

/// Orchestrates the detectors over the branch and merge lifecycle.
pub struct ContextGraphEngine {
    drift: DriftDetector,
    collision: CollisionDetector,
    decay: DecayEngine,
    convergence: ConvergenceDetector,
    provenance: ProvenanceTracker,
    events: Arc<EventBus>,
    context_index: Arc<dyn ContextIndexBuilder>,
    context_config: ContextIndexConfig,
    topics: Arc<dyn TopicProvider>,
}

impl ContextGraphEngine {
    /// Assemble an engine from prebuilt detectors.
    ///
    /// Detectors that should emit escalations or telemetry must already hold
    /// the same bus passed here.
    pub fn new(
        drift: DriftDetector,
        collision: CollisionDetector,
        decay: DecayEngine,
        convergence: ConvergenceDetector,
        provenance: ProvenanceTracker,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            drift,
            collision,
            decay,
            convergence,
            provenance,
            events,
            context_index: Arc::new(MinimalContextIndex),
            context_config: ContextIndexConfig::default(),
            topics: Arc::new(NoTopics),
        }
    }

    /// Build every detector from its data source, wired to `events` and
    /// configured from `config`.
    pub fn from_sources(
        sources: DataSources,
        config: &ContextGraphConfig,
        events: Arc<EventBus>,
    ) -> Self {
        Self::new(
            DriftDetector::new(sources.drift).with_events(events.clone()),
            CollisionDetector::new(sources.collision).with_events(events.clone()),
            DecayEngine::new(sources.decay)
                .with_config(config.decay.clone())
                .with_events(events.clone()),
            ConvergenceDetector::new(sources.convergence)
                .with_config(config.convergence.clone())
                .with_events(events.clone()),
            ProvenanceTracker::new(sources.provenance),
            events,
        )
        .with_context_index_config(config.context_index.clone())
    }

    pub fn with_context_index_builder(mut self, builder: Arc<dyn ContextIndexBuilder>) -> Self {
        self.context_index = builder;
        self
    }

    /// Budget applied to structured context indexes.
    pub fn with_context_index_config(mut self, config: ContextIndexConfig) -> Self {
        self.context_config = config;
        self
    }

    pub fn with_topic_provider(mut self, topics: Arc<dyn TopicProvider>) -> Self {
        self.topics = topics;
        self
    }

    pub fn drift(&self) -> &DriftDetector {
        &self.drift
    }

    pub fn collision(&self) -> &CollisionDetector {
        &self.collision
    }

    pub fn decay(&self) -> &DecayEngine {
        &self.decay
    }

    pub fn convergence(&self) -> &ConvergenceDetector {
        &self.convergence
    }

    pub fn provenance(&self) -> &ProvenanceTracker {
        &self.provenance
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Classify the endpoint's drift and apply the matching remediation.
    pub async fn on_schema_change(&self, endpoint_id: &str) -> GraphResult<RemediationResult> {
        let event = self.drift.detect(endpoint_id).await?;
        Ok(self.drift.remediate(&event))
    }

    /// Decide whether `source` can merge into `target`.
    ///
    /// Every collision is resolved; one resolution that needs a human blocks
    /// the whole merge. `MERGED` is a decision only, nothing is applied.
    pub async fn on_merge_attempt(&self, source: &str, target: &str) -> GraphResult<MergeResult> {
        async {
            let collisions = self.collision.detect(source, target).await?;
            let mut resolutions = Vec::with_capacity(collisions.len());
            for collision in &collisions {
                resolutions.push(self.collision.resolve(collision).await);
            }
            let result = MergeResult::from_resolutions(resolutions);
            info!(status = ?result.status, collisions = collisions.len(), "merge decided");
            Ok::<_, GraphError>(result)
        }
        .instrument(merge_span!(source, target))
        .await
    }

    /// Decay scan, then promote the best agreeing pair of every topic the
    /// topic provider lists.
    pub async fn run_maintenance(&self, branch_name: &str) -> GraphResult<MaintenanceReport> {
        async {
            let decay = self.decay.scan(branch_name).await?;
            let topics = self.topics.topics(branch_name).await?;

            let mut promotions = 0;
            for topic in &topics {
                let candidates = self.convergence.scan(topic).await?;
                let Some(best) = best_candidate(&candidates) else {
                    continue;
                };
                if !self.convergence.is_promotable(&best.score) {
                    debug!(topic = %topic, combined = best.score.combined, "best pair below threshold");
                    continue;
                }
                self.convergence
                    .promote(&[best.node_a.clone(), best.node_b.clone()])
                    .await?;
                promotions += 1;
            }

            let span = Span::current();
            span.record("tombstoned", decay.tombstoned);
            span.record("promotions", promotions);
            Ok::<_, GraphError>(MaintenanceReport {
                branch_name: branch_name.to_string(),
                decay_scanned: decay.scanned,
                tombstoned: decay.tombstoned,
                convergence_promotions: promotions,
            })
        }
        .instrument(maintenance_span!(branch_name))
        .await
    }

    /// The serialized context index for `agent_id` on `branch_name`.
    ///
    /// Text from the builder passes through unchanged; structured output is
    /// serialized as JSON. A structured [`ContextIndexPayload`] is trimmed to
    /// the configured token budget first. Emits `SESSION_RESUME` with the
    /// token estimate and build time.
    pub async fn build_context_index(&self, agent_id: &str, branch_name: &str) -> GraphResult<String> {
        async {
            let started = Instant::now();
            let output = self.context_index.build(agent_id, branch_name).await?;
            let drift_warning = matches!(
                &output,
                ContextIndexOutput::Structured(value) if value["driftWarning"] == true
            );
            let index = self.render(output)?;
            let tokens = estimate_tokens(&index);
            Span::current().record("tokens", tokens);

            self.events
                .report(SessionResumeAttributes {
                    agent_id: agent_id.to_string(),
                    branch: branch_name.to_string(),
                    index_token_count: tokens,
                    drift_status: (if drift_warning { "warning" } else { "ok" }).to_string(),
                    duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                })
                .await;
            Ok::<_, GraphError>(index)
        }
        .instrument(session_resume_span!(agent_id, branch_name))
        .await
    }

    fn render(&self, output: ContextIndexOutput) -> GraphResult<String> {
        match output {
            ContextIndexOutput::Structured(value) => {
                match serde_json::from_value::<ContextIndexPayload>(value.clone()) {
                    Ok(payload) => serialize_context_index(&payload, self.context_config.max_tokens),
                    Err(_) => Ok(serde_json::to_string(&value)?),
                }
            }
            text => text.into_text(),
        }
    }

    /// Report that `node` was committed.
    pub async fn on_knowledge_committed(&self, node: &KnowledgeNode, author: Author) {
        self.events
            .report(CommitKnowledgeAttributes {
                topic: node.topic.clone(),
                author: author_label(author).to_string(),
                agent_id: node.agent_id().map(str::to_string),
                evidence_ref_count: node.metadata.evidence_refs.len(),
                new_version_hash: node.version_hash.clone(),
            })
            .await;
    }
}

fn author_label(author: Author) -> &'static str {
    match author {
        Author::Human => "HUMAN",
        Author::Agent => "AGENT",
        Author::System => "SYSTEM",
    }
}
