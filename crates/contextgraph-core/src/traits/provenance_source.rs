use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::GraphResult;
use crate::models::ProvenanceEntry;

#[async_trait]
pub trait ProvenanceDataSource: Send + Sync {
    /// Full commit lineage of a node, as reconstructed by storage.
    async fn get_chain(&self, node_id: &str) -> GraphResult<Vec<ProvenanceEntry>>;

    async fn get_commit(&self, commit_hash: &str) -> GraphResult<Option<ProvenanceEntry>>;

    /// Hashes of every commit on `branch_name` created at or before `at`.
    async fn list_commits_before(&self, branch_name: &str, at: DateTime<Utc>) -> GraphResult<Vec<String>>;
}
