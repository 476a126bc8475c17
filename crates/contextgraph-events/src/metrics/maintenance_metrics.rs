use serde::Serialize;

/// Decay and convergence counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaintenanceMetrics {
    pub decay_scans_total: u64,
    /// `decay_tombstones_total`
    pub decay_tombstones_total: u64,
    /// `convergence_promotions_total`
    pub convergence_promotions_total: u64,
}

impl MaintenanceMetrics {
    pub fn record_scan(&mut self, tombstoned: u64) {
        self.decay_scans_total += 1;
        self.decay_tombstones_total += tombstoned;
    }

    pub fn record_promotion(&mut self) {
        self.convergence_promotions_total += 1;
    }
}
