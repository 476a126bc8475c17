use contextgraph_core::models::{CollisionClass, HumanRequiredEvent, Resolution, ResolutionStrategy};

/// Resolution strategy for a classified collision.
pub fn resolution_for(class: &CollisionClass) -> Resolution {
    let (strategy, requires_human) = match class {
        CollisionClass::Additive => (ResolutionStrategy::AutoMerge, false),
        CollisionClass::ConcurrentEdit => (ResolutionStrategy::SchemaFirst, false),
        CollisionClass::SchemaTemporal { .. } => (ResolutionStrategy::RebaseToCurrent, false),
        CollisionClass::Epistemic { .. } => (ResolutionStrategy::HumanArbitration, true),
        CollisionClass::PolicyConflict { .. } => (ResolutionStrategy::EscalateImmediate, true),
    };
    Resolution {
        strategy,
        requires_human,
    }
}

/// The escalation a collision raises, if it needs a human.
pub fn escalation_for(collision_id: &str, class: &CollisionClass) -> Option<HumanRequiredEvent> {
    match class {
        CollisionClass::Epistemic { contradiction, .. } => Some(HumanRequiredEvent::EpistemicCollision {
            collision_id: collision_id.to_string(),
            detail: contradiction.clone(),
        }),
        CollisionClass::PolicyConflict { field } => Some(HumanRequiredEvent::PolicyConflict {
            collision_id: collision_id.to_string(),
            field: field.clone(),
        }),
        CollisionClass::Additive
        | CollisionClass::ConcurrentEdit
        | CollisionClass::SchemaTemporal { .. } => None,
    }
}
