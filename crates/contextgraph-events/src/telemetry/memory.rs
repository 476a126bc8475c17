//! Bounded in-memory telemetry ring, for dashboards and tests.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use contextgraph_core::errors::TelemetryError;
use contextgraph_core::models::{EngineEventType, TelemetryEvent};
use contextgraph_core::traits::TelemetryBackend;

/// Keeps the most recent `capacity` events; older events are evicted first.
#[derive(Debug)]
pub struct MemoryBackend {
    capacity: usize,
    events: Mutex<VecDeque<TelemetryEvent>>,
}

impl MemoryBackend {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Mutex::new(VecDeque::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of retained events, oldest first.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of retained events of one type.
    pub fn count(&self, event_type: EngineEventType) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.event.event_type == event_type)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl TelemetryBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn record(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }
}
