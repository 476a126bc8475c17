use std::collections::BTreeMap;

use serde::Serialize;

/// `human_required_events_total`, labelled by escalation type.
///
/// Counts every escalation the bus dispatched, whether or not a handler was
/// registered to receive it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EscalationMetrics {
    pub human_required_total: u64,
    pub by_type: BTreeMap<String, u64>,
}

impl EscalationMetrics {
    pub fn record(&mut self, kind: &str) {
        self.human_required_total += 1;
        *self.by_type.entry(kind.to_string()).or_default() += 1;
    }

    pub fn count(&self, kind: &str) -> u64 {
        self.by_type.get(kind).copied().unwrap_or(0)
    }
}
