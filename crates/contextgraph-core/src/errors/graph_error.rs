use super::{CollisionError, ConvergenceError, TelemetryError};

/// Top-level error for the decision engine.
///
/// Business outcomes (blocked merges, drift severities, failed provenance
/// verification) are returned as values, never as errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("knowledge node not found: {id}")]
    NodeNotFound { id: String },

    #[error("data source {source_name} failed: {reason}")]
    DataSource { source_name: String, reason: String },

    #[error("commit on branch {commit_branch} cannot advance branch {branch}")]
    BranchMismatch {
        branch: String,
        commit_branch: String,
    },

    #[error("branch {branch} head is {expected}, commit parent is {actual}")]
    BranchHeadMismatch {
        branch: String,
        expected: String,
        actual: String,
    },

    #[error("{event_type} handler failed: {reason}")]
    HandlerFailed { event_type: String, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("collision error: {0}")]
    CollisionError(#[from] CollisionError),

    #[error("convergence error: {0}")]
    ConvergenceError(#[from] ConvergenceError),

    #[error("telemetry error: {0}")]
    TelemetryError(#[from] TelemetryError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GraphError {
    /// Shorthand for a failed collaborator call.
    pub fn data_source(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataSource {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
