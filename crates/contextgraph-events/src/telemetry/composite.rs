use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

use contextgraph_core::errors::TelemetryError;
use contextgraph_core::models::TelemetryEvent;
use contextgraph_core::traits::TelemetryBackend;

/// Fans every event out to several backends.
///
/// Each backend is isolated: a failing `record` or `flush` is logged and the
/// remaining backends still run. The composite itself never fails.
#[derive(Clone, Default)]
pub struct CompositeBackend {
    backends: Vec<Arc<dyn TelemetryBackend>>,
}

impl CompositeBackend {
    pub fn new(backends: Vec<Arc<dyn TelemetryBackend>>) -> Self {
        Self { backends }
    }

    pub fn push(&mut self, backend: Arc<dyn TelemetryBackend>) {
        self.backends.push(backend);
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

#[async_trait]
impl TelemetryBackend for CompositeBackend {
    fn name(&self) -> &str {
        "composite"
    }

    fn record(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        for backend in &self.backends {
            if let Err(e) = backend.record(event) {
                warn!(backend = backend.name(), error = %e, "telemetry backend record failed");
            }
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), TelemetryError> {
        let results = join_all(self.backends.iter().map(|backend| backend.flush())).await;
        for (backend, result) in self.backends.iter().zip(results) {
            if let Err(e) = result {
                warn!(backend = backend.name(), error = %e, "telemetry backend flush failed");
            }
        }
        Ok(())
    }
}
