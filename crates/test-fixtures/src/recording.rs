use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use contextgraph_core::errors::TelemetryError;
use contextgraph_core::models::{EngineEventType, TelemetryEvent};
use contextgraph_core::traits::TelemetryBackend;

/// Shared, append-only log used to assert the order in which telemetry and
/// handlers observed events.
#[derive(Debug, Clone, Default)]
pub struct OrderingLog(Arc<Mutex<Vec<String>>>);

impl OrderingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Keeps every recorded event and writes `telemetry:<TYPE>` to an ordering log.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: OrderingLog,
    events: Mutex<Vec<TelemetryEvent>>,
    flushes: Mutex<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: OrderingLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn of_type(&self, event_type: EngineEventType) -> Vec<TelemetryEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.event.event_type == event_type)
            .collect()
    }

    pub fn flushes(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

#[async_trait]
impl TelemetryBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn record(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        self.log.push(format!("telemetry:{}", event.event.event_type));
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<(), TelemetryError> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Fails every `record` and `flush`, counting the attempts.
#[derive(Debug, Default)]
pub struct FailingBackend {
    attempts: Mutex<usize>,
}

impl FailingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl TelemetryBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn record(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        *self.attempts.lock().unwrap() += 1;
        Err(TelemetryError::RecordFailed {
            backend: "failing".to_string(),
            reason: "sink unavailable".to_string(),
        })
    }

    async fn flush(&self) -> Result<(), TelemetryError> {
        *self.attempts.lock().unwrap() += 1;
        Err(TelemetryError::FlushFailed {
            backend: "failing".to_string(),
            reason: "sink unavailable".to_string(),
        })
    }
}
