use std::collections::BTreeMap;

use serde::Serialize;

/// `drift_events_total`, labelled by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriftMetrics {
    pub events_total: u64,
    pub by_severity: BTreeMap<String, u64>,
}

impl DriftMetrics {
    pub fn record(&mut self, severity: &str) {
        self.events_total += 1;
        *self.by_severity.entry(severity.to_string()).or_default() += 1;
    }

    /// Events seen for one severity label, e.g. `"CORRUPTION"`.
    pub fn count(&self, severity: &str) -> u64 {
        self.by_severity.get(severity).copied().unwrap_or(0)
    }
}
