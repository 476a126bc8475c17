use contextgraph_convergence::compute_score;
use proptest::prelude::*;
use test_fixtures::node;

fn evidence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("doc:[0-9]", 0..4)
}

fn agent() -> impl Strategy<Value = Option<String>> {
    prop::option::of("agent-[a-c]")
}

proptest! {
    #[test]
    fn components_are_bounded(
        ev_a in evidence(), ev_b in evidence(),
        agent_a in agent(), agent_b in agent(),
        same_topic in any::<bool>(), same_claim in any::<bool>(),
    ) {
        let refs_a: Vec<&str> = ev_a.iter().map(String::as_str).collect();
        let refs_b: Vec<&str> = ev_b.iter().map(String::as_str).collect();
        let mut a = node("a", "auth", "claim").evidence(&refs_a);
        let mut b = node("b", if same_topic { "auth" } else { "billing" }, if same_claim { "claim" } else { "other" })
            .evidence(&refs_b);
        if let Some(id) = &agent_a { a = a.agent(id); }
        if let Some(id) = &agent_b { b = b.agent(id); }

        let score = compute_score(&a.build(), &b.build());
        for value in [score.structural, score.evidential, score.temporal, score.combined] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn scoring_is_symmetric(
        ev_a in evidence(), ev_b in evidence(),
        agent_a in agent(), agent_b in agent(),
    ) {
        let refs_a: Vec<&str> = ev_a.iter().map(String::as_str).collect();
        let refs_b: Vec<&str> = ev_b.iter().map(String::as_str).collect();
        let mut a = node("a", "auth", "x").evidence(&refs_a);
        let mut b = node("b", "auth", "y").evidence(&refs_b);
        if let Some(id) = &agent_a { a = a.agent(id); }
        if let Some(id) = &agent_b { b = b.agent(id); }
        let (a, b) = (a.build(), b.build());

        prop_assert_eq!(compute_score(&a, &b), compute_score(&b, &a));
    }

    #[test]
    fn identical_independent_claims_converge(claim in "[a-z ]{1,20}", n in 0u8..5) {
        let a = node("a", "auth", &claim).agent("agent-a").evidence(&[format!("left:{n}").as_str()]).build();
        let b = node("b", "auth", &claim).agent("agent-b").evidence(&[format!("right:{n}").as_str()]).build();

        let score = compute_score(&a, &b);
        prop_assert!(score.combined > 0.85);
        prop_assert_eq!(score.temporal, 1.0);
    }
}
