/// Telemetry backend errors. Never propagated out of the event bus.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("telemetry backend {backend} rejected event: {reason}")]
    RecordFailed { backend: String, reason: String },

    #[error("telemetry backend {backend} failed to flush: {reason}")]
    FlushFailed { backend: String, reason: String },
}
