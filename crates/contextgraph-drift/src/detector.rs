//! DriftDetector: classify oracle schema changes and decide remediation.
//!
//! Stateless apart from its collaborators; share one instance across tasks.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{DriftEvent, DriftSeverity, RemediationResult, TypeMap};
use contextgraph_core::traits::DriftDataSource;
use contextgraph_events::telemetry::DriftDetectAttributes;
use contextgraph_events::EventBus;

use crate::classification::{affected_operations, classify};
use crate::remediation;

pub struct DriftDetector {
    source: Arc<dyn DriftDataSource>,
    events: Option<Arc<EventBus>>,
}

impl DriftDetector {
    pub fn new(source: Arc<dyn DriftDataSource>) -> Self {
        Self {
            source,
            events: None,
        }
    }

    /// Attach the bus used for telemetry and corruption escalations.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Load both type maps for `endpoint_id`, classify the change, and tell
    /// the data source about the new severity.
    #[instrument(name = "contextgraph.drift.detect", skip(self))]
    pub async fn detect(&self, endpoint_id: &str) -> GraphResult<DriftEvent> {
        let pair = self.source.load_type_map(endpoint_id).await?;
        let severity = classify(&pair.before, &pair.after);
        self.source.update_endpoint(endpoint_id, severity).await?;

        let event = DriftEvent {
            endpoint_id: endpoint_id.to_string(),
            severity,
            affected_operations: affected_operations(&pair.before, &pair.after),
            remediation_policy: severity.remediation_policy(),
            detected_at: Utc::now(),
        };
        info!(
            severity = %event.severity,
            policy = %event.remediation_policy,
            affected = event.affected_operations.len(),
            "drift classified"
        );

        if let Some(bus) = &self.events {
            bus.report(DriftDetectAttributes {
                endpoint_id: event.endpoint_id.clone(),
                severity,
                affected_operation_count: event.affected_operations.len(),
            })
            .await;
        }
        Ok(event)
    }

    pub fn classify(&self, before: &TypeMap, after: &TypeMap) -> DriftSeverity {
        classify(before, after)
    }

    /// Apply the remediation policy carried by `event`.
    ///
    /// Corruption raises a `CORRUPTION_DETECTED` escalation and requires a
    /// human; every other severity is applied automatically.
    #[instrument(name = "contextgraph.drift.remediate", skip(self, event), fields(endpoint_id = %event.endpoint_id))]
    pub fn remediate(&self, event: &DriftEvent) -> RemediationResult {
        let (result, escalation) = remediation::plan(event);
        if let Some(escalation) = escalation {
            warn!(severity = %event.severity, "drift requires human review");
            match &self.events {
                Some(bus) => bus.emit_human_required(escalation),
                None => warn!("no event bus attached; corruption escalation not delivered"),
            }
        } else {
            debug!(action = %result.action, "remediation applied");
        }
        result
    }
}
