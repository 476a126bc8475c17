//! [`EventBus`]: human-required and lifecycle channels.
//!
//! Construct one bus at process start and pass the same `Arc<EventBus>` to the
//! orchestrator and to every detector that emits. There is no global instance.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use dashmap::DashMap;
use futures::future::{join_all, BoxFuture, FutureExt};
use tracing::{debug, warn};

use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{EngineEvent, EngineEventType, HumanRequiredEvent, TelemetryEvent};
use contextgraph_core::traits::TelemetryBackend;

use crate::metrics::MetricsCollector;

pub type HumanRequiredHandler =
    Arc<dyn Fn(HumanRequiredEvent) -> BoxFuture<'static, ()> + Send + Sync>;

pub type LifecycleHandler =
    Arc<dyn Fn(EngineEvent) -> BoxFuture<'static, GraphResult<()>> + Send + Sync>;

/// Routes escalations and lifecycle events, recording telemetry first.
///
/// Registry guards are never held across an `.await`.
#[derive(Default)]
pub struct EventBus {
    human_handlers: RwLock<Vec<HumanRequiredHandler>>,
    handlers: DashMap<EngineEventType, Vec<LifecycleHandler>>,
    telemetry: RwLock<Option<Arc<dyn TelemetryBackend>>>,
    metrics: Mutex<MetricsCollector>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_telemetry(backend: Arc<dyn TelemetryBackend>) -> Self {
        let bus = Self::new();
        bus.set_telemetry(Some(backend));
        bus
    }

    /// Swap the telemetry backend. `None` turns recording into a no-op.
    pub fn set_telemetry(&self, backend: Option<Arc<dyn TelemetryBackend>>) {
        *self
            .telemetry
            .write()
            .unwrap_or_else(PoisonError::into_inner) = backend;
    }

    pub fn telemetry(&self) -> Option<Arc<dyn TelemetryBackend>> {
        self.telemetry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a handler for human-required escalations.
    pub fn on_human_required<F, Fut>(&self, handler: F)
    where
        F: Fn(HumanRequiredEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: HumanRequiredHandler = Arc::new(move |event| handler(event).boxed());
        self.human_handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    /// Register a handler for one lifecycle event type.
    pub fn on<F, Fut>(&self, event_type: EngineEventType, handler: F)
    where
        F: Fn(EngineEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = GraphResult<()>> + Send + 'static,
    {
        let handler: LifecycleHandler = Arc::new(move |event| handler(event).boxed());
        self.handlers.entry(event_type).or_default().push(handler);
    }

    pub fn handler_count(&self, event_type: EngineEventType) -> usize {
        self.handlers.get(&event_type).map_or(0, |h| h.len())
    }

    /// Fire-and-forget escalation.
    ///
    /// Records a synthetic `HUMAN_REQUIRED` telemetry event, then spawns one
    /// detached tokio task per handler. Dispatch is unbounded and best-effort:
    /// there is no backpressure, and a failing or panicking handler only ends
    /// its own task. Outside a tokio runtime the dispatch is dropped (telemetry
    /// is still recorded).
    pub fn emit_human_required(&self, event: HumanRequiredEvent) {
        self.record(&EngineEvent::for_human_required(&event));

        let handlers = self
            .human_handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if handlers.is_empty() {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                for handler in handlers {
                    runtime.spawn(handler(event.clone()));
                }
            }
            Err(_) => warn!(
                escalation = event.label(),
                "no async runtime; human-required dispatch dropped"
            ),
        }
    }

    /// Record telemetry, then run every handler for the event's type
    /// concurrently and wait for all of them.
    ///
    /// Telemetry is recorded before any handler runs. Every handler runs to
    /// completion even if another fails; the first failure is returned.
    pub async fn emit(&self, event: EngineEvent) -> GraphResult<()> {
        self.record(&event);

        let handlers = self
            .handlers
            .get(&event.event_type)
            .map(|h| h.value().clone())
            .unwrap_or_default();
        if handlers.is_empty() {
            return Ok(());
        }

        debug!(event_type = %event.event_type, handlers = handlers.len(), "dispatching event");
        let results = join_all(handlers.iter().map(|handler| handler(event.clone()))).await;
        results.into_iter().collect()
    }

    /// Emit on behalf of a detector. Handler failures are logged, never returned:
    /// reporting must not fail the operation being reported.
    pub async fn report(&self, event: impl Into<EngineEvent>) {
        let event = event.into();
        let event_type = event.event_type;
        if let Err(e) = self.emit(event).await {
            warn!(event_type = %event_type, error = %e, "event handler failed");
        }
    }

    /// Snapshot of the counters for every event recorded so far.
    pub fn metrics(&self) -> MetricsCollector {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn reset_metrics(&self) {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Flush the current telemetry backend. Failures are logged.
    pub async fn flush(&self) {
        if let Some(backend) = self.telemetry() {
            if let Err(e) = backend.flush().await {
                warn!(backend = backend.name(), error = %e, "telemetry flush failed");
            }
        }
    }

    fn record(&self, event: &EngineEvent) {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(event);

        let Some(backend) = self.telemetry() else {
            return;
        };
        if let Err(e) = backend.record(&TelemetryEvent::from(event)) {
            warn!(backend = backend.name(), error = %e, "telemetry record failed");
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let human = self
            .human_handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let lifecycle: usize = self.handlers.iter().map(|h| h.len()).sum();
        f.debug_struct("EventBus")
            .field("human_handlers", &human)
            .field("lifecycle_handlers", &lifecycle)
            .field("telemetry", &self.telemetry().map(|b| b.name().to_string()))
            .finish()
    }
}
