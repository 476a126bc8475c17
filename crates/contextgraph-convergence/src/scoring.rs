use contextgraph_core::constants::{
    CONVERGENCE_WEIGHT_EVIDENTIAL, CONVERGENCE_WEIGHT_INDEPENDENCE, CONVERGENCE_WEIGHT_STRUCTURAL,
    DEPENDENT_SCORE, INDEPENDENT_SCORE,
};
use contextgraph_core::models::{round_score, ConvergenceCandidate, ConvergenceScore, KnowledgeNode};

/// Agreement score for a pair of nodes.
///
/// ```text
/// structural  = 1 if topics are equal, else 0
/// evidential  = max(|A ∩ B| / max(|A|, |B|, 1), 1 if claims are equal)
/// temporal    = 1 if both agents are known and distinct and no evidence is
///               shared, else 0.2
/// combined    = 0.4 × structural + 0.3 × evidential + 0.3 × temporal
/// ```
pub fn compute_score(a: &KnowledgeNode, b: &KnowledgeNode) -> ConvergenceScore {
    let structural = if a.topic == b.topic { 1.0 } else { 0.0 };

    let evidence_a = &a.metadata.evidence_refs;
    let evidence_b = &b.metadata.evidence_refs;
    let overlap = evidence_a.intersection(evidence_b).count();
    let largest = evidence_a.len().max(evidence_b.len()).max(1);
    let overlap_score = (overlap as f64 / largest as f64).min(1.0);
    let claim_match = if a.claim == b.claim { 1.0 } else { 0.0 };
    let evidential = overlap_score.max(claim_match);

    let independent = match (a.agent_id(), b.agent_id()) {
        (Some(agent_a), Some(agent_b)) => agent_a != agent_b && overlap == 0,
        _ => false,
    };
    let temporal = if independent {
        INDEPENDENT_SCORE
    } else {
        DEPENDENT_SCORE
    };

    ConvergenceScore {
        structural,
        evidential,
        temporal,
        combined: round_score(
            CONVERGENCE_WEIGHT_STRUCTURAL * structural
                + CONVERGENCE_WEIGHT_EVIDENTIAL * evidential
                + CONVERGENCE_WEIGHT_INDEPENDENCE * temporal,
        ),
    }
}

/// Highest-scoring candidate by `combined`. Ties go to the earliest pair.
pub fn best_candidate(candidates: &[ConvergenceCandidate]) -> Option<&ConvergenceCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if current.score.combined >= candidate.score.combined => Some(current),
        _ => Some(candidate),
    })
}
