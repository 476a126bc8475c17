use serde::{Deserialize, Serialize};

use crate::errors::GraphResult;

/// What a context index builder hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextIndexOutput {
    /// Already serialized; passed through unchanged.
    Text(String),
    /// Serialized to JSON by the engine.
    Structured(serde_json::Value),
}

impl ContextIndexOutput {
    pub fn into_text(self) -> GraphResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Structured(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<String> for ContextIndexOutput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<serde_json::Value> for ContextIndexOutput {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

/// Per-endpoint line in the context index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSummary {
    pub name: String,
    pub drift_status: String,
    /// Short hash prefix.
    pub hash: String,
}

/// Compact summary of a branch pushed to an agent when its session resumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextIndexPayload {
    pub agent_id: String,
    pub branch: String,
    /// Short head hash prefix, or "genesis" for a branch without commits.
    pub head_hash: String,
    pub endpoints: Vec<EndpointSummary>,
    /// `name@hash-prefix` for every live skill.
    pub skill_index: Vec<String>,
    pub knowledge_count: usize,
    pub drift_warning: bool,
}
