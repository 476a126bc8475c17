//! Context index payload and budgeted serialization.
//!
//! The index is what an agent receives when its session resumes: branch
//! head, endpoint drift, live skills, and a knowledge count. It has to fit
//! a small token budget, so serialization sheds detail until it does.

use contextgraph_core::config::ContextIndexConfig;
use contextgraph_core::constants::{CHARS_PER_TOKEN, UNKNOWN};
use contextgraph_core::errors::GraphResult;
use contextgraph_core::models::{ContextIndexPayload, DriftSeverity, EndpointSummary, SchemaEndpoint};

const SHORT_HASH_LEN: usize = 8;
const GENESIS: &str = "genesis";

/// A live skill, listed in the index as `name@hash-prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRef {
    pub name: String,
    pub version_hash: String,
}

/// Rough token estimate: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

/// Assemble the payload for one agent on one branch.
///
/// `head_hash` is `None` for a branch without commits. The drift warning is
/// raised when any endpoint is `BREAKING` or `CORRUPTION`, even when the
/// endpoint list itself is left out by config.
pub fn build_payload(
    agent_id: &str,
    branch: &str,
    head_hash: Option<&str>,
    endpoints: &[SchemaEndpoint],
    skills: &[SkillRef],
    knowledge_count: usize,
    config: &ContextIndexConfig,
) -> ContextIndexPayload {
    let drift_warning = endpoints.iter().any(|e| {
        matches!(
            e.drift_status,
            Some(DriftSeverity::Breaking | DriftSeverity::Corruption)
        )
    });

    let endpoints = if config.include_drift_status {
        endpoints
            .iter()
            .map(|e| EndpointSummary {
                name: e.name.clone(),
                drift_status: e.drift_status_label().to_string(),
                hash: e
                    .current_hash
                    .as_deref()
                    .map_or_else(|| UNKNOWN.to_string(), short_hash),
            })
            .collect()
    } else {
        Vec::new()
    };

    let skill_index = if config.include_skill_index {
        skills
            .iter()
            .map(|s| format!("{}@{}", s.name, short_hash(&s.version_hash)))
            .collect()
    } else {
        Vec::new()
    };

    ContextIndexPayload {
        agent_id: agent_id.to_string(),
        branch: branch.to_string(),
        head_hash: head_hash.map_or_else(|| GENESIS.to_string(), short_hash),
        endpoints,
        skill_index,
        knowledge_count,
        drift_warning,
    }
}

/// Serialize `payload` to JSON within `max_tokens`.
///
/// Over budget, skills are dropped from the end first, then endpoints. A
/// payload that is still too large with both lists empty is returned as is.
pub fn serialize_context_index(payload: &ContextIndexPayload, max_tokens: usize) -> GraphResult<String> {
    let mut json = serde_json::to_string(payload)?;
    if estimate_tokens(&json) <= max_tokens {
        return Ok(json);
    }

    let mut trimmed = payload.clone();
    while !trimmed.skill_index.is_empty() && estimate_tokens(&json) > max_tokens {
        trimmed.skill_index.pop();
        json = serde_json::to_string(&trimmed)?;
    }
    while !trimmed.endpoints.is_empty() && estimate_tokens(&json) > max_tokens {
        trimmed.endpoints.pop();
        json = serde_json::to_string(&trimmed)?;
    }
    Ok(json)
}
