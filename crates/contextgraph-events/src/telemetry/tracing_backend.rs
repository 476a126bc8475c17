use contextgraph_core::errors::TelemetryError;
use contextgraph_core::models::TelemetryEvent;
use contextgraph_core::traits::TelemetryBackend;

/// Logs each event as a structured `tracing` record under the
/// `contextgraph::telemetry` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TelemetryBackend for TracingBackend {
    fn name(&self) -> &str {
        "tracing"
    }

    fn record(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        let e = &event.event;
        let attributes = serde_json::Value::from(
            e.attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<serde_json::Map<_, _>>(),
        );
        tracing::info!(
            target: "contextgraph::telemetry",
            event_id = %event.event_id,
            event_type = %e.event_type,
            agent_id = %e.agent_id,
            branch = %e.branch_name,
            endpoint_id = e.endpoint_id.as_deref(),
            severity = e.severity.map(|s| s.as_str()),
            collision_class = e.collision_class.as_deref(),
            human_required = e.human_required,
            token_count = e.token_count,
            attributes = %attributes,
            "telemetry event"
        );
        Ok(())
    }
}
