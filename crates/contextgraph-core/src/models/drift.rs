use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One introspection of an endpoint's operation set, with the declared diff
/// against the previous introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMap {
    pub hash: String,
    #[serde(default)]
    pub operations: Vec<String>,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub deprecated: Vec<String>,
    #[serde(default)]
    pub corruption: bool,
}

impl TypeMap {
    pub fn new(hash: impl Into<String>, operations: &[&str]) -> Self {
        Self {
            hash: hash.into(),
            operations: operations.iter().map(|op| op.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Whether any structural diff category is populated.
    pub fn has_structural_diff(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.deprecated.is_empty()
    }
}

/// The two type maps compared by drift detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapPair {
    pub before: TypeMap,
    pub after: TypeMap,
}

/// Drift severity, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftSeverity {
    Corruption,
    Breaking,
    Deprecation,
    Additive,
    Silent,
}

impl DriftSeverity {
    pub const ALL: [DriftSeverity; 5] = [
        Self::Corruption,
        Self::Breaking,
        Self::Deprecation,
        Self::Additive,
        Self::Silent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corruption => "CORRUPTION",
            Self::Breaking => "BREAKING",
            Self::Deprecation => "DEPRECATION",
            Self::Additive => "ADDITIVE",
            Self::Silent => "SILENT",
        }
    }

    /// Remediation policy for this severity.
    pub fn remediation_policy(self) -> RemediationPolicy {
        match self {
            Self::Corruption => RemediationPolicy::Rollback,
            Self::Breaking => RemediationPolicy::PauseNotify,
            Self::Deprecation => RemediationPolicy::Reground,
            Self::Additive | Self::Silent => RemediationPolicy::AutoSync,
        }
    }
}

impl fmt::Display for DriftSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemediationPolicy {
    AutoSync,
    Reground,
    PauseNotify,
    Rollback,
}

impl RemediationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AutoSync => "AUTO_SYNC",
            Self::Reground => "REGROUND",
            Self::PauseNotify => "PAUSE_NOTIFY",
            Self::Rollback => "ROLLBACK",
        }
    }
}

impl fmt::Display for RemediationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one endpoint's drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftEvent {
    pub endpoint_id: String,
    pub severity: DriftSeverity,
    pub affected_operations: Vec<String>,
    pub remediation_policy: RemediationPolicy,
    pub detected_at: DateTime<Utc>,
}

/// Outcome of applying a remediation policy.
///
/// Only corruption sets `requires_human`. A `PauseNotify` result is still
/// "applied": the caller enacts the pause by reading `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationResult {
    pub action: RemediationPolicy,
    pub requires_human: bool,
    pub message: String,
}
