/// Span names, shared by the detectors and the span macros below.
pub mod names {
    pub const DRIFT_DETECT: &str = "contextgraph.drift.detect";
    pub const DRIFT_REMEDIATE: &str = "contextgraph.drift.remediate";
    pub const COLLISION_RESOLVE: &str = "contextgraph.collision.resolve";
    pub const DECAY_SCAN: &str = "contextgraph.decay.scan";
    pub const CONVERGENCE_SCAN: &str = "contextgraph.convergence.scan";
    pub const CONVERGENCE_PROMOTE: &str = "contextgraph.convergence.promote";
    pub const PROVENANCE_VERIFY: &str = "contextgraph.provenance.verify";
    pub const MERGE_ATTEMPT: &str = "contextgraph.merge.attempt";
    pub const MAINTENANCE: &str = "contextgraph.maintenance";
    pub const SESSION_RESUME: &str = "contextgraph.session.resume";
    pub const COMMIT_KNOWLEDGE: &str = "contextgraph.commit.knowledge";
}

/// Span for a merge attempt between two branches.
#[macro_export]
macro_rules! merge_span {
    ($source:expr, $target:expr) => {
        tracing::info_span!("contextgraph.merge.attempt", source = %$source, target = %$target)
    };
}

/// Span for a maintenance pass over one branch.
#[macro_export]
macro_rules! maintenance_span {
    ($branch:expr) => {
        tracing::info_span!(
            "contextgraph.maintenance",
            branch = %$branch,
            tombstoned = tracing::field::Empty,
            promotions = tracing::field::Empty,
        )
    };
}

/// Span for building a session-resume context index.
#[macro_export]
macro_rules! session_resume_span {
    ($agent_id:expr, $branch:expr) => {
        tracing::info_span!(
            "contextgraph.session.resume",
            agent_id = %$agent_id,
            branch = %$branch,
            tokens = tracing::field::Empty,
        )
    };
}
