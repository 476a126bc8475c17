use contextgraph_core::errors::TelemetryError;
use contextgraph_core::models::TelemetryEvent;
use contextgraph_core::traits::TelemetryBackend;

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl TelemetryBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    fn record(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Ok(())
    }
}
