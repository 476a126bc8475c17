use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DriftSeverity;
use crate::constants::SYSTEM_ACTOR;

/// Escalation raised when an automatic decision could not be made safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HumanRequiredEvent {
    EpistemicCollision { collision_id: String, detail: String },
    PolicyConflict { collision_id: String, field: String },
    CorruptionDetected { endpoint_id: String, detail: String },
}

impl HumanRequiredEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EpistemicCollision { .. } => "EPISTEMIC_COLLISION",
            Self::PolicyConflict { .. } => "POLICY_CONFLICT",
            Self::CorruptionDetected { .. } => "CORRUPTION_DETECTED",
        }
    }
}

/// Typed lifecycle events routed through the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineEventType {
    DriftDetect,
    CollisionResolve,
    DecayScan,
    ConvergencePromote,
    SessionResume,
    CommitKnowledge,
    HumanRequired,
}

impl EngineEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DriftDetect => "DRIFT_DETECT",
            Self::CollisionResolve => "COLLISION_RESOLVE",
            Self::DecayScan => "DECAY_SCAN",
            Self::ConvergencePromote => "CONVERGENCE_PROMOTE",
            Self::SessionResume => "SESSION_RESUME",
            Self::CommitKnowledge => "COMMIT_KNOWLEDGE",
            Self::HumanRequired => "HUMAN_REQUIRED",
        }
    }
}

impl fmt::Display for EngineEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle event. Fields beyond the type and actor are optional context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEvent {
    pub event_type: EngineEventType,
    pub agent_id: String,
    pub branch_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<DriftSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_class: Option<String>,
    #[serde(default)]
    pub human_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl EngineEvent {
    /// A new event attributed to the system actor.
    pub fn new(event_type: EngineEventType) -> Self {
        Self {
            event_type,
            agent_id: SYSTEM_ACTOR.to_string(),
            branch_name: SYSTEM_ACTOR.to_string(),
            endpoint_id: None,
            severity: None,
            collision_class: None,
            human_required: false,
            token_count: None,
            attributes: BTreeMap::new(),
        }
    }

    /// The synthetic event recorded for every human-required escalation.
    pub fn for_human_required(escalation: &HumanRequiredEvent) -> Self {
        let mut event = Self::new(EngineEventType::HumanRequired)
            .with_attribute("escalation", escalation.label());
        event.human_required = true;
        match escalation {
            HumanRequiredEvent::EpistemicCollision { collision_id, .. }
            | HumanRequiredEvent::PolicyConflict { collision_id, .. } => {
                event.collision_class = Some(escalation.label().to_string());
                event
                    .attributes
                    .insert("collisionId".to_string(), collision_id.clone().into());
            }
            HumanRequiredEvent::CorruptionDetected { endpoint_id, .. } => {
                event.endpoint_id = Some(endpoint_id.clone());
            }
        }
        event
    }

    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    pub fn with_branch(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = branch_name.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint_id: impl Into<String>) -> Self {
        self.endpoint_id = Some(endpoint_id.into());
        self
    }

    pub fn with_severity(mut self, severity: DriftSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_collision_class(mut self, class: impl Into<String>) -> Self {
        self.collision_class = Some(class.into());
        self
    }

    pub fn with_human_required(mut self, human_required: bool) -> Self {
        self.human_required = human_required;
        self
    }

    pub fn with_token_count(mut self, tokens: usize) -> Self {
        self.token_count = Some(tokens);
        self
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// What a telemetry backend receives: the event plus recording metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub event_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: EngineEvent,
}

impl From<&EngineEvent> for TelemetryEvent {
    fn from(event: &EngineEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            event: event.clone(),
        }
    }
}
