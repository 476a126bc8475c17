use std::sync::Arc;

use chrono::{Duration, Utc};
use contextgraph_core::models::SchemaEndpoint;
use contextgraph_decay::{DecayContext, DecayEngine};
use proptest::prelude::*;
use test_fixtures::{node, InMemoryDecaySource};

fn engine() -> DecayEngine {
    DecayEngine::new(Arc::new(InMemoryDecaySource::default()))
}

proptest! {
    #[test]
    fn components_are_bounded(
        age_minutes in -10_000i64..200_000,
        confidence in -2.0f64..3.0,
        isomorphisms in 0usize..3,
    ) {
        let now = Utc::now();
        let mut builder = node("n", "t", "c")
            .verified_at(now - Duration::minutes(age_minutes))
            .confidence(confidence);
        for i in 0..isomorphisms {
            builder = builder.isomorphism(serde_json::json!(i));
        }
        let score = engine().compute_score(&builder.build(), &DecayContext::new(now, SchemaEndpoint::unknown()));

        for value in [score.temporal, score.structural, score.empirical, score.combined] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn decay_never_decreases_with_age(
        days in 0i64..90,
        extra in 0i64..90,
        confidence in 0.0f64..=1.0,
    ) {
        let now = Utc::now();
        let ctx = DecayContext::new(now, SchemaEndpoint::unknown());
        let younger = node("a", "t", "c").verified_days_ago(now, days).confidence(confidence).build();
        let older = node("b", "t", "c").verified_days_ago(now, days + extra).confidence(confidence).build();

        let engine = engine();
        prop_assert!(engine.compute_score(&older, &ctx).combined >= engine.compute_score(&younger, &ctx).combined);
    }

    #[test]
    fn decay_never_increases_with_confidence(
        days in 0i64..90,
        low in 0.0f64..=1.0,
        delta in 0.0f64..=1.0,
    ) {
        let now = Utc::now();
        let ctx = DecayContext::new(now, SchemaEndpoint::unknown());
        let high = (low + delta).min(1.0);
        let unsure = node("a", "t", "c").verified_days_ago(now, days).confidence(low).build();
        let sure = node("b", "t", "c").verified_days_ago(now, days).confidence(high).build();

        let engine = engine();
        prop_assert!(engine.compute_score(&sure, &ctx).combined <= engine.compute_score(&unsure, &ctx).combined);
    }

    #[test]
    fn tombstone_flag_matches_threshold(
        days in 0i64..90,
        confidence in 0.0f64..=1.0,
        corroborated in any::<bool>(),
    ) {
        let now = Utc::now();
        let mut builder = node("n", "t", "c").verified_days_ago(now, days).confidence(confidence);
        if corroborated {
            builder = builder.isomorphism(serde_json::json!({}));
        }
        let engine = engine();
        let score = engine.compute_score(&builder.build(), &DecayContext::new(now, SchemaEndpoint::unknown()));

        prop_assert_eq!(score.tombstone, score.combined >= engine.config().tombstone_threshold);
    }
}
