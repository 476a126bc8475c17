use std::collections::HashSet;

use contextgraph_core::models::{DriftSeverity, TypeMap};

/// Classify the change from `before` to `after`.
///
/// Precedence: corruption, then removed, deprecated, added. Anything else,
/// including a bare hash change, is silent. Only `after` carries the diff, so
/// `before` does not influence the result.
pub fn classify(_before: &TypeMap, after: &TypeMap) -> DriftSeverity {
    if after.corruption {
        DriftSeverity::Corruption
    } else if !after.removed.is_empty() {
        DriftSeverity::Breaking
    } else if !after.deprecated.is_empty() {
        DriftSeverity::Deprecation
    } else if !after.added.is_empty() {
        DriftSeverity::Additive
    } else {
        DriftSeverity::Silent
    }
}

/// Operations touched by the change, first occurrence wins.
///
/// Removed, added, then deprecated operations. When the hash moved but no
/// diff category is populated, every operation in `after` counts as affected.
pub fn affected_operations(before: &TypeMap, after: &TypeMap) -> Vec<String> {
    let hash_only = before.hash != after.hash && !after.has_structural_diff();
    let changed: &[String] = if hash_only { &after.operations } else { &[] };

    let mut seen = HashSet::new();
    after
        .removed
        .iter()
        .chain(&after.added)
        .chain(&after.deprecated)
        .chain(changed)
        .filter(|op| seen.insert(op.as_str()))
        .cloned()
        .collect()
}
