use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable, parent-linked record of a knowledge mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryCommit {
    pub hash: String,
    #[serde(default)]
    pub parent_hash: Option<String>,
    pub branch_name: String,
    pub author: String,
    pub message: String,
    /// Hash of the oracle schema the commit was grounded against.
    pub schema_hash: String,
    pub snapshot: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl MemoryCommit {
    /// Build a commit stamped with the current time and a content-derived hash.
    pub fn new(
        parent_hash: Option<String>,
        branch_name: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
        schema_hash: impl Into<String>,
        snapshot: serde_json::Value,
    ) -> Self {
        let branch_name = branch_name.into();
        let author = author.into();
        let message = message.into();
        let schema_hash = schema_hash.into();
        let hash = Self::compute_hash(
            parent_hash.as_deref(),
            &branch_name,
            &author,
            &message,
            &schema_hash,
            &snapshot,
        );
        Self {
            hash,
            parent_hash,
            branch_name,
            author,
            message,
            schema_hash,
            snapshot,
            created_at: Utc::now(),
        }
    }

    /// blake3 over the commit's content. Fields are NUL-separated so that
    /// adjacent fields cannot be shifted into one another.
    pub fn compute_hash(
        parent_hash: Option<&str>,
        branch_name: &str,
        author: &str,
        message: &str,
        schema_hash: &str,
        snapshot: &serde_json::Value,
    ) -> String {
        let mut hasher = blake3::Hasher::new();
        for part in [
            parent_hash.unwrap_or_default(),
            branch_name,
            author,
            message,
            schema_hash,
        ] {
            hasher.update(part.as_bytes());
            hasher.update(&[0]);
        }
        hasher.update(snapshot.to_string().as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn is_root(&self) -> bool {
        self.parent_hash.is_none()
    }
}
