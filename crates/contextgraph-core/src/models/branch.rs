use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemoryCommit;
use crate::errors::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchStatus {
    #[default]
    Active,
    Merged,
    Archived,
}

/// A named, mutable pointer to a commit chain.
///
/// The only mutable entity in the model. `head_hash` always references an
/// existing commit: branches are created from a commit and only advanced by
/// a commit whose parent is the current head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub head_hash: String,
    #[serde(default)]
    pub parent_branch: Option<String>,
    pub agent_id: String,
    #[serde(default)]
    pub status: BranchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Start a branch at an existing commit.
    pub fn new(name: impl Into<String>, head: &MemoryCommit, agent_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            head_hash: head.hash.clone(),
            parent_branch: None,
            agent_id: agent_id.into(),
            status: BranchStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fork a new branch from this branch's head.
    pub fn fork(&self, name: impl Into<String>, agent_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            head_hash: self.head_hash.clone(),
            parent_branch: Some(self.name.clone()),
            agent_id: agent_id.into(),
            status: BranchStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the head to `commit`, which must extend the current head on this branch.
    pub fn advance_head(&mut self, commit: &MemoryCommit) -> GraphResult<()> {
        if commit.branch_name != self.name {
            return Err(GraphError::BranchMismatch {
                branch: self.name.clone(),
                commit_branch: commit.branch_name.clone(),
            });
        }
        if commit.parent_hash.as_deref() != Some(self.head_hash.as_str()) {
            return Err(GraphError::BranchHeadMismatch {
                branch: self.name.clone(),
                expected: self.head_hash.clone(),
                actual: commit
                    .parent_hash
                    .clone()
                    .unwrap_or_else(|| "none".to_string()),
            });
        }
        self.head_hash = commit.hash.clone();
        self.updated_at = Utc::now();
        Ok(())
    }
}
