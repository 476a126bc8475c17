use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{Collision, CollisionClass, Resolution};
use contextgraph_core::traits::CollisionDataSource;
use contextgraph_events::telemetry::CollisionResolveAttributes;
use contextgraph_events::EventBus;

use crate::strategy::{escalation_for, resolution_for};

/// Classifies branch collisions and decides how each is resolved.
pub struct CollisionDetector {
    source: Arc<dyn CollisionDataSource>,
    events: Option<Arc<EventBus>>,
}

impl CollisionDetector {
    pub fn new(source: Arc<dyn CollisionDataSource>) -> Self {
        Self {
            source,
            events: None,
        }
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    #[instrument(skip(self))]
    pub async fn detect(&self, branch_a: &str, branch_b: &str) -> GraphResult<Vec<Collision>> {
        let collisions = self.source.list_collisions(branch_a, branch_b).await?;
        debug!(count = collisions.len(), "collisions listed");
        Ok(collisions)
    }

    /// Structured class with missing context filled in.
    pub fn classify(&self, collision: &Collision) -> CollisionClass {
        CollisionClass::from(&collision.kind)
    }

    /// Decide the resolution for one collision.
    ///
    /// Epistemic and policy collisions raise exactly one human-required
    /// escalation each. The escalation is fire-and-forget and never fails
    /// the resolution.
    #[instrument(name = "contextgraph.collision.resolve", skip(self, collision), fields(collision_id = %collision.id))]
    pub async fn resolve(&self, collision: &Collision) -> Resolution {
        let class = self.classify(collision);
        let resolution = resolution_for(&class);
        info!(
            class = class.label(),
            strategy = %resolution.strategy,
            requires_human = resolution.requires_human,
            "collision resolved"
        );

        let Some(bus) = &self.events else {
            if resolution.requires_human {
                warn!("no event bus attached; escalation not delivered");
            }
            return resolution;
        };
        if let Some(escalation) = escalation_for(&collision.id, &class) {
            bus.emit_human_required(escalation);
        }
        bus.report(CollisionResolveAttributes {
            collision_id: collision.id.clone(),
            collision_class: class.label().to_string(),
            resolution_strategy: resolution.strategy,
            requires_human: resolution.requires_human,
        })
        .await;
        resolution
    }
}
