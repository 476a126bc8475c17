use contextgraph_core::models::{DriftSeverity, TypeMap};
use contextgraph_drift::{affected_operations, classify};
use proptest::prelude::*;

fn ops() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
}

fn type_map() -> impl Strategy<Value = TypeMap> {
    ("[a-f0-9]{4}", ops(), ops(), ops(), ops(), any::<bool>()).prop_map(
        |(hash, operations, added, removed, deprecated, corruption)| TypeMap {
            hash,
            operations,
            added,
            removed,
            deprecated,
            corruption,
        },
    )
}

proptest! {
    #[test]
    fn classification_follows_precedence(before in type_map(), after in type_map()) {
        let severity = classify(&before, &after);
        let expected = if after.corruption {
            DriftSeverity::Corruption
        } else if !after.removed.is_empty() {
            DriftSeverity::Breaking
        } else if !after.deprecated.is_empty() {
            DriftSeverity::Deprecation
        } else if !after.added.is_empty() {
            DriftSeverity::Additive
        } else {
            DriftSeverity::Silent
        };
        prop_assert_eq!(severity, expected);
    }

    #[test]
    fn affected_operations_are_unique(before in type_map(), after in type_map()) {
        let affected = affected_operations(&before, &after);
        let mut deduped = affected.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), affected.len());
    }

    #[test]
    fn affected_operations_cover_the_structural_diff(before in type_map(), after in type_map()) {
        let affected = affected_operations(&before, &after);
        for op in after.removed.iter().chain(&after.added).chain(&after.deprecated) {
            prop_assert!(affected.contains(op));
        }
        if after.has_structural_diff() || before.hash == after.hash {
            let diff_len = after.removed.len() + after.added.len() + after.deprecated.len();
            prop_assert!(affected.len() <= diff_len);
        }
    }
}
