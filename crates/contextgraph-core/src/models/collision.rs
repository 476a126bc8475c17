use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN;
use crate::errors::CollisionError;

/// Declared kind of a branch collision, with the context each kind may carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollisionKind {
    Additive,
    ConcurrentEdit,
    SchemaTemporal {
        hash_a: Option<String>,
        hash_b: Option<String>,
    },
    Epistemic {
        node_a: Option<String>,
        node_b: Option<String>,
        contradiction: Option<String>,
    },
    PolicyConflict {
        field: Option<String>,
    },
}

/// A conflict found between two knowledge branches. Transient.
///
/// Deserialization goes through [`RawCollision`], so an unrecognized `kind`
/// is rejected instead of being mapped onto one of the five known kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCollision")]
pub struct Collision {
    pub id: String,
    #[serde(flatten)]
    pub kind: CollisionKind,
}

impl Collision {
    pub fn new(id: impl Into<String>, kind: CollisionKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// Untyped collision as reported by storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollision {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub node_a: Option<String>,
    #[serde(default)]
    pub node_b: Option<String>,
    #[serde(default)]
    pub contradiction: Option<String>,
    #[serde(default)]
    pub hash_a: Option<String>,
    #[serde(default)]
    pub hash_b: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl TryFrom<RawCollision> for Collision {
    type Error = CollisionError;

    fn try_from(raw: RawCollision) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_str() {
            "ADDITIVE" => CollisionKind::Additive,
            "CONCURRENT_EDIT" => CollisionKind::ConcurrentEdit,
            "SCHEMA_TEMPORAL" => CollisionKind::SchemaTemporal {
                hash_a: raw.hash_a,
                hash_b: raw.hash_b,
            },
            "EPISTEMIC" => CollisionKind::Epistemic {
                node_a: raw.node_a,
                node_b: raw.node_b,
                contradiction: raw.contradiction,
            },
            "POLICY_CONFLICT" => CollisionKind::PolicyConflict { field: raw.field },
            other => {
                return Err(CollisionError::UnknownKind {
                    kind: other.to_string(),
                })
            }
        };
        Ok(Self { id: raw.id, kind })
    }
}

/// Structured classification of a collision, with missing context filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollisionClass {
    Additive,
    ConcurrentEdit,
    SchemaTemporal {
        hash_a: String,
        hash_b: String,
    },
    Epistemic {
        node_a: String,
        node_b: String,
        contradiction: String,
    },
    PolicyConflict {
        field: String,
    },
}

impl CollisionClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Additive => "ADDITIVE",
            Self::ConcurrentEdit => "CONCURRENT_EDIT",
            Self::SchemaTemporal { .. } => "SCHEMA_TEMPORAL",
            Self::Epistemic { .. } => "EPISTEMIC",
            Self::PolicyConflict { .. } => "POLICY_CONFLICT",
        }
    }
}

impl From<&CollisionKind> for CollisionClass {
    fn from(kind: &CollisionKind) -> Self {
        let or_unknown = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN.to_string());
        match kind {
            CollisionKind::Additive => Self::Additive,
            CollisionKind::ConcurrentEdit => Self::ConcurrentEdit,
            CollisionKind::SchemaTemporal { hash_a, hash_b } => Self::SchemaTemporal {
                hash_a: or_unknown(hash_a),
                hash_b: or_unknown(hash_b),
            },
            CollisionKind::Epistemic {
                node_a,
                node_b,
                contradiction,
            } => Self::Epistemic {
                node_a: or_unknown(node_a),
                node_b: or_unknown(node_b),
                contradiction: contradiction
                    .clone()
                    .unwrap_or_else(|| "contradiction".to_string()),
            },
            CollisionKind::PolicyConflict { field } => Self::PolicyConflict {
                field: or_unknown(field),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    AutoMerge,
    SchemaFirst,
    RebaseToCurrent,
    HumanArbitration,
    EscalateImmediate,
}

impl ResolutionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AutoMerge => "auto_merge",
            Self::SchemaFirst => "schema_first",
            Self::RebaseToCurrent => "rebase_to_current",
            Self::HumanArbitration => "human_arbitration",
            Self::EscalateImmediate => "escalate_immediate",
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one collision is to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub strategy: ResolutionStrategy,
    pub requires_human: bool,
}
