use contextgraph_core::config::DecayConfig;
use contextgraph_core::constants::{DECAY_WEIGHT_EMPIRICAL, DECAY_WEIGHT_STRUCTURAL, DECAY_WEIGHT_TEMPORAL};
use contextgraph_core::models::{round_score, DecayScore, KnowledgeNode};

use crate::factors::{self, DecayContext};
use crate::tombstone;

/// Weighted three-factor decay.
///
/// ```text
/// combined = 0.4 × temporal + 0.3 × structural + 0.3 × empirical
/// ```
///
/// `combined` is rounded to 4 decimal places before the tombstone check, so
/// the flag always agrees with the reported score.
pub fn compute(node: &KnowledgeNode, ctx: &DecayContext, config: &DecayConfig) -> DecayScore {
    let temporal = factors::temporal::calculate(node, ctx.now, config.temporal_horizon_days);
    let structural = factors::structural::calculate(node);
    let empirical = factors::empirical::calculate(node);

    let combined = round_score(
        DECAY_WEIGHT_TEMPORAL * temporal
            + DECAY_WEIGHT_STRUCTURAL * structural
            + DECAY_WEIGHT_EMPIRICAL * empirical,
    );

    DecayScore {
        temporal,
        structural,
        empirical,
        combined,
        tombstone: tombstone::should_tombstone(combined, config.tombstone_threshold),
    }
}
