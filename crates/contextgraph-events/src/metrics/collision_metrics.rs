use std::collections::BTreeMap;

use serde::Serialize;

/// `collision_resolutions_total`, labelled by collision class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollisionMetrics {
    pub resolutions_total: u64,
    pub by_class: BTreeMap<String, u64>,
}

impl CollisionMetrics {
    pub fn record(&mut self, class: &str) {
        self.resolutions_total += 1;
        *self.by_class.entry(class.to_string()).or_default() += 1;
    }

    pub fn count(&self, class: &str) -> u64 {
        self.by_class.get(class).copied().unwrap_or(0)
    }
}
