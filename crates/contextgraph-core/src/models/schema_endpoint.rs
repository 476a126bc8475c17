use serde::{Deserialize, Serialize};

use super::{DriftSeverity, TypeMap};
use crate::constants::UNKNOWN;

/// An external schema source ("oracle") the knowledge base is grounded against.
///
/// Mutable only for sync and drift metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEndpoint {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub current_hash: Option<String>,
    #[serde(default)]
    pub previous_hash: Option<String>,
    /// Last classified drift; `None` until the endpoint has been checked.
    #[serde(default)]
    pub drift_status: Option<DriftSeverity>,
    #[serde(default)]
    pub type_map_snapshot: Option<TypeMap>,
}

impl SchemaEndpoint {
    pub fn new(id: impl Into<String>, name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            uri: uri.into(),
            current_hash: None,
            previous_hash: None,
            drift_status: None,
            type_map_snapshot: None,
        }
    }

    /// Stand-in used when no endpoint is known.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, "")
    }

    /// Record a drift classification, rotating the hash when it changed.
    pub fn record_drift(&mut self, severity: DriftSeverity, new_hash: Option<String>) {
        if let Some(hash) = new_hash {
            if self.current_hash.as_deref() != Some(hash.as_str()) {
                self.previous_hash = self.current_hash.take();
                self.current_hash = Some(hash);
            }
        }
        self.drift_status = Some(severity);
    }

    /// Drift status as shown to agents.
    pub fn drift_status_label(&self) -> &'static str {
        self.drift_status.map(DriftSeverity::as_str).unwrap_or("UNKNOWN")
    }
}
