use contextgraph_core::constants::{STRUCTURAL_DECAY_CORROBORATED, STRUCTURAL_DECAY_UNCORROBORATED};
use contextgraph_core::models::KnowledgeNode;

/// Structural decay: 1.0 without isomorphisms, 0.3 with at least one.
pub fn calculate(node: &KnowledgeNode) -> f64 {
    if node.is_corroborated() {
        STRUCTURAL_DECAY_CORROBORATED
    } else {
        STRUCTURAL_DECAY_UNCORROBORATED
    }
}
