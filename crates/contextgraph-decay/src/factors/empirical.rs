use contextgraph_core::constants::DEFAULT_CONFIDENCE;
use contextgraph_core::models::{clamp_unit, KnowledgeNode};

/// Empirical decay: `1 - confidence`, confidence clamped to [0, 1] and
/// defaulting to 0.5.
pub fn calculate(node: &KnowledgeNode) -> f64 {
    let confidence = node.metadata.confidence.unwrap_or(DEFAULT_CONFIDENCE);
    1.0 - clamp_unit(confidence)
}
