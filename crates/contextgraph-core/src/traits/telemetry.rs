use async_trait::async_trait;

use crate::errors::TelemetryError;
use crate::models::TelemetryEvent;

/// A telemetry sink.
///
/// `record` is synchronous and must be cheap; sinks that ship events over the
/// network should buffer and ship from `flush`. Errors are reported to the
/// caller, which logs and drops them.
#[async_trait]
pub trait TelemetryBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn record(&self, event: &TelemetryEvent) -> Result<(), TelemetryError>;

    async fn flush(&self) -> Result<(), TelemetryError> {
        Ok(())
    }
}
