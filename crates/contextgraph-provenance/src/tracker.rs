use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{EpistemicState, ProvenanceEntry, VerificationResult};
use contextgraph_core::traits::ProvenanceDataSource;

/// Reconstructs and verifies commit ancestry. Read-only.
pub struct ProvenanceTracker {
    source: Arc<dyn ProvenanceDataSource>,
}

impl ProvenanceTracker {
    pub fn new(source: Arc<dyn ProvenanceDataSource>) -> Self {
        Self { source }
    }

    /// The node's lineage, exactly as storage reconstructs it.
    pub async fn chain(&self, node_id: &str) -> GraphResult<Vec<ProvenanceEntry>> {
        self.source.get_chain(node_id).await
    }

    /// Check that `commit_hash` and its direct parent both exist.
    ///
    /// Only one hop is checked; a broken link further up is not detected.
    /// An empty parent hash marks a root commit.
    #[instrument(name = "contextgraph.provenance.verify", skip(self))]
    pub async fn verify(&self, commit_hash: &str) -> GraphResult<VerificationResult> {
        let Some(commit) = self.source.get_commit(commit_hash).await? else {
            warn!("commit missing");
            return Ok(VerificationResult::missing(commit_hash));
        };

        if let Some(parent_hash) = commit.parent_hash.as_deref().filter(|h| !h.is_empty()) {
            if self.source.get_commit(parent_hash).await?.is_none() {
                warn!(parent_hash, "parent commit missing");
                return Ok(VerificationResult::missing(parent_hash));
            }
        }
        debug!("commit verified");
        Ok(VerificationResult::verified())
    }

    /// Commits visible on `branch_name` at `at`.
    pub async fn replay(&self, branch_name: &str, at: DateTime<Utc>) -> GraphResult<EpistemicState> {
        let commit_hashes = self.source.list_commits_before(branch_name, at).await?;
        Ok(EpistemicState {
            branch_name: branch_name.to_string(),
            at,
            commit_hashes,
        })
    }
}
