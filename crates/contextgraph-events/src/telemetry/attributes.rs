//! Typed attribute records for each lifecycle event.
//!
//! Each record converts into the matching [`EngineEvent`], so a detector can
//! call `bus.report(DecayScanAttributes { .. })` without hand-building the
//! attribute map. Attribute keys are camelCase to match what dashboards query.

use contextgraph_core::models::{DriftSeverity, EngineEvent, EngineEventType, ResolutionStrategy};

#[derive(Debug, Clone, PartialEq)]
pub struct DriftDetectAttributes {
    pub endpoint_id: String,
    pub severity: DriftSeverity,
    pub affected_operation_count: usize,
}

impl From<DriftDetectAttributes> for EngineEvent {
    fn from(a: DriftDetectAttributes) -> Self {
        EngineEvent::new(EngineEventType::DriftDetect)
            .with_endpoint(a.endpoint_id)
            .with_severity(a.severity)
            .with_human_required(a.severity == DriftSeverity::Corruption)
            .with_attribute("affectedOperationCount", a.affected_operation_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResolveAttributes {
    pub collision_id: String,
    /// Class label, e.g. `EPISTEMIC`.
    pub collision_class: String,
    pub resolution_strategy: ResolutionStrategy,
    pub requires_human: bool,
}

impl From<CollisionResolveAttributes> for EngineEvent {
    fn from(a: CollisionResolveAttributes) -> Self {
        EngineEvent::new(EngineEventType::CollisionResolve)
            .with_collision_class(a.collision_class)
            .with_human_required(a.requires_human)
            .with_attribute("collisionId", a.collision_id)
            .with_attribute("resolutionStrategy", a.resolution_strategy.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecayScanAttributes {
    pub branch_name: String,
    pub nodes_scanned: usize,
    pub nodes_tombstoned: usize,
}

impl From<DecayScanAttributes> for EngineEvent {
    fn from(a: DecayScanAttributes) -> Self {
        EngineEvent::new(EngineEventType::DecayScan)
            .with_branch(a.branch_name)
            .with_attribute("nodesScanned", a.nodes_scanned)
            .with_attribute("nodesTombstoned", a.nodes_tombstoned)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergencePromoteAttributes {
    pub topic: String,
    /// Distinct agent ids, in node order; `"unknown"` for nodes without one.
    pub contributing_agents: Vec<String>,
    pub convergence_score: f64,
}

impl From<ConvergencePromoteAttributes> for EngineEvent {
    fn from(a: ConvergencePromoteAttributes) -> Self {
        EngineEvent::new(EngineEventType::ConvergencePromote)
            .with_attribute("topic", a.topic)
            .with_attribute("contributingAgents", a.contributing_agents.join(","))
            .with_attribute("convergenceScore", a.convergence_score)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionResumeAttributes {
    pub agent_id: String,
    pub branch: String,
    pub index_token_count: usize,
    /// `"warning"` when the index carried a drift warning, else `"ok"`.
    pub drift_status: String,
    /// Time spent building the index.
    pub duration_ms: u64,
}

impl From<SessionResumeAttributes> for EngineEvent {
    fn from(a: SessionResumeAttributes) -> Self {
        EngineEvent::new(EngineEventType::SessionResume)
            .with_agent(a.agent_id)
            .with_branch(a.branch)
            .with_token_count(a.index_token_count)
            .with_attribute("indexTokenCount", a.index_token_count)
            .with_attribute("driftStatus", a.drift_status)
            .with_attribute("durationMs", a.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommitKnowledgeAttributes {
    pub topic: String,
    pub author: String,
    pub agent_id: Option<String>,
    pub evidence_ref_count: usize,
    pub new_version_hash: String,
}

impl From<CommitKnowledgeAttributes> for EngineEvent {
    fn from(a: CommitKnowledgeAttributes) -> Self {
        let mut event = EngineEvent::new(EngineEventType::CommitKnowledge)
            .with_attribute("topic", a.topic)
            .with_attribute("author", a.author)
            .with_attribute("evidenceRefCount", a.evidence_ref_count)
            .with_attribute("newVersionHash", a.new_version_hash);
        if let Some(agent_id) = a.agent_id {
            event = event.with_agent(agent_id);
        }
        event
    }
}
