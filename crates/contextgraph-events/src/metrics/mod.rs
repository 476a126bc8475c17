//! Central metrics registry.
//!
//! [`MetricsCollector`] owns one collector per domain. The bus feeds it every
//! event it records, so counters move even when no telemetry backend is set.

pub mod collision_metrics;
pub mod drift_metrics;
pub mod escalation_metrics;
pub mod maintenance_metrics;
pub mod session_metrics;

pub use collision_metrics::CollisionMetrics;
pub use drift_metrics::DriftMetrics;
pub use escalation_metrics::EscalationMetrics;
pub use maintenance_metrics::MaintenanceMetrics;
pub use session_metrics::{Histogram, SessionMetrics};

use contextgraph_core::constants::UNKNOWN;
use contextgraph_core::models::{EngineEvent, EngineEventType};

/// Central metrics registry that owns all domain-specific collectors.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MetricsCollector {
    pub drift: DriftMetrics,
    pub collision: CollisionMetrics,
    pub escalation: EscalationMetrics,
    pub maintenance: MaintenanceMetrics,
    pub session: SessionMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one recorded event into the counters.
    pub fn observe(&mut self, event: &EngineEvent) {
        match event.event_type {
            EngineEventType::DriftDetect => {
                let severity = event.severity.map_or(UNKNOWN, |s| s.as_str());
                self.drift.record(severity);
            }
            EngineEventType::CollisionResolve => {
                let class = event.collision_class.as_deref().unwrap_or(UNKNOWN);
                self.collision.record(class);
            }
            EngineEventType::HumanRequired => {
                let kind = event
                    .attributes
                    .get("escalation")
                    .and_then(|v| v.as_str())
                    .unwrap_or(UNKNOWN);
                self.escalation.record(kind);
            }
            EngineEventType::DecayScan => {
                let tombstoned = event
                    .attributes
                    .get("nodesTombstoned")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0);
                self.maintenance.record_scan(tombstoned);
            }
            EngineEventType::ConvergencePromote => self.maintenance.record_promotion(),
            EngineEventType::SessionResume => {
                let duration = event.attributes.get("durationMs").and_then(|v| v.as_f64());
                self.session
                    .record(event.token_count.map(|t| t as f64), duration);
            }
            EngineEventType::CommitKnowledge => {}
        }
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
