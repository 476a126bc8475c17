use contextgraph_core::errors::{CollisionError, GraphError};
use contextgraph_core::models::*;
use serde_json::json;

// --- Collisions ---

#[test]
fn collision_decodes_every_known_kind() {
    let kinds = [
        "ADDITIVE",
        "CONCURRENT_EDIT",
        "SCHEMA_TEMPORAL",
        "EPISTEMIC",
        "POLICY_CONFLICT",
    ];
    for kind in kinds {
        let collision: Collision =
            serde_json::from_value(json!({ "id": "c1", "kind": kind })).unwrap();
        assert_eq!(CollisionClass::from(&collision.kind).label(), kind);
    }
}

#[test]
fn collision_rejects_unknown_kind() {
    let err = serde_json::from_value::<Collision>(json!({ "id": "c1", "kind": "SEMANTIC" }))
        .unwrap_err();
    assert!(err.to_string().contains("unknown collision kind: SEMANTIC"));

    let raw = RawCollision {
        id: "c2".into(),
        kind: "epistemic".into(),
        ..RawCollision::default()
    };
    let err = Collision::try_from(raw).unwrap_err();
    assert!(matches!(err, CollisionError::UnknownKind { ref kind } if kind == "epistemic"));
}

#[test]
fn collision_keeps_kind_specific_fields() {
    let collision: Collision = serde_json::from_value(json!({
        "id": "c3",
        "kind": "SCHEMA_TEMPORAL",
        "hash_a": "aaa",
        "field": "ignored for this kind"
    }))
    .unwrap();
    assert_eq!(
        collision.kind,
        CollisionKind::SchemaTemporal {
            hash_a: Some("aaa".into()),
            hash_b: None
        }
    );
}

#[test]
fn collision_serializes_with_kind_tag() {
    let collision = Collision::new(
        "c4",
        CollisionKind::PolicyConflict {
            field: Some("retention".into()),
        },
    );
    let value = serde_json::to_value(&collision).unwrap();
    assert_eq!(value["kind"], "POLICY_CONFLICT");
    assert_eq!(value["field"], "retention");
    let back: Collision = serde_json::from_value(value).unwrap();
    assert_eq!(back, collision);
}

#[test]
fn classification_fills_missing_context() {
    let class = CollisionClass::from(&CollisionKind::Epistemic {
        node_a: Some("n1".into()),
        node_b: None,
        contradiction: None,
    });
    assert_eq!(
        class,
        CollisionClass::Epistemic {
            node_a: "n1".into(),
            node_b: "unknown".into(),
            contradiction: "contradiction".into(),
        }
    );
}

#[test]
fn resolution_strategy_serializes_snake_case() {
    let value = serde_json::to_value(ResolutionStrategy::HumanArbitration).unwrap();
    assert_eq!(value, "human_arbitration");
}

// --- Drift ---

#[test]
fn severity_policy_mapping() {
    assert_eq!(DriftSeverity::Corruption.remediation_policy(), RemediationPolicy::Rollback);
    assert_eq!(DriftSeverity::Breaking.remediation_policy(), RemediationPolicy::PauseNotify);
    assert_eq!(DriftSeverity::Deprecation.remediation_policy(), RemediationPolicy::Reground);
    assert_eq!(DriftSeverity::Additive.remediation_policy(), RemediationPolicy::AutoSync);
    assert_eq!(DriftSeverity::Silent.remediation_policy(), RemediationPolicy::AutoSync);
}

#[test]
fn type_map_defaults_missing_diff_fields() {
    let map: TypeMap = serde_json::from_value(json!({ "hash": "a", "operations": ["q1"] })).unwrap();
    assert!(!map.corruption);
    assert!(!map.has_structural_diff());
}

#[test]
fn endpoint_record_drift_rotates_hash() {
    let mut endpoint = SchemaEndpoint::new("e1", "billing", "https://billing.example/graphql");
    assert_eq!(endpoint.drift_status_label(), "UNKNOWN");

    endpoint.record_drift(DriftSeverity::Additive, Some("h1".into()));
    endpoint.record_drift(DriftSeverity::Breaking, Some("h2".into()));
    assert_eq!(endpoint.current_hash.as_deref(), Some("h2"));
    assert_eq!(endpoint.previous_hash.as_deref(), Some("h1"));
    assert_eq!(endpoint.drift_status_label(), "BREAKING");

    // Same hash again does not lose the previous hash.
    endpoint.record_drift(DriftSeverity::Silent, Some("h2".into()));
    assert_eq!(endpoint.previous_hash.as_deref(), Some("h1"));
}

// --- Commits and branches ---

#[test]
fn commit_hash_is_content_derived() {
    let a = MemoryCommit::new(None, "main", "agent-1", "init", "s1", json!({"n": 1}));
    let b = MemoryCommit::new(None, "main", "agent-1", "init", "s1", json!({"n": 1}));
    let c = MemoryCommit::new(None, "main", "agent-1", "init", "s1", json!({"n": 2}));
    assert_eq!(a.hash, b.hash);
    assert_ne!(a.hash, c.hash);
    assert!(a.is_root());
}

#[test]
fn branch_advances_only_from_its_head() {
    let root = MemoryCommit::new(None, "main", "agent-1", "init", "s1", json!({}));
    let mut branch = Branch::new("main", &root, "agent-1");
    assert_eq!(branch.head_hash, root.hash);

    let next = MemoryCommit::new(Some(root.hash.clone()), "main", "agent-1", "add", "s1", json!({"k": 1}));
    branch.advance_head(&next).unwrap();
    assert_eq!(branch.head_hash, next.hash);

    // Stale parent.
    let stale = MemoryCommit::new(Some(root.hash.clone()), "main", "agent-1", "late", "s1", json!({}));
    let err = branch.advance_head(&stale).unwrap_err();
    assert!(matches!(err, GraphError::BranchHeadMismatch { .. }));
    assert_eq!(branch.head_hash, next.hash);
}

#[test]
fn branch_rejects_commit_from_other_branch() {
    let root = MemoryCommit::new(None, "main", "agent-1", "init", "s1", json!({}));
    let mut branch = Branch::new("main", &root, "agent-1");
    let fork = branch.fork("agent/ws/task", "agent-2");
    assert_eq!(fork.parent_branch.as_deref(), Some("main"));
    assert_eq!(fork.head_hash, root.hash);

    let foreign = MemoryCommit::new(Some(root.hash.clone()), "agent/ws/task", "agent-2", "x", "s1", json!({}));
    assert!(matches!(
        branch.advance_head(&foreign),
        Err(GraphError::BranchMismatch { .. })
    ));
}

// --- Reports and events ---

#[test]
fn merge_result_blocks_on_any_human_resolution() {
    let merged = MergeResult::from_resolutions(vec![Resolution {
        strategy: ResolutionStrategy::AutoMerge,
        requires_human: false,
    }]);
    assert_eq!(merged.status, MergeStatus::Merged);

    let blocked = MergeResult::from_resolutions(vec![
        Resolution {
            strategy: ResolutionStrategy::AutoMerge,
            requires_human: false,
        },
        Resolution {
            strategy: ResolutionStrategy::EscalateImmediate,
            requires_human: true,
        },
    ]);
    assert_eq!(blocked.status, MergeStatus::Blocked);
    assert!(blocked.requires_human);

    assert_eq!(MergeResult::from_resolutions(vec![]).status, MergeStatus::Merged);
}

#[test]
fn human_required_event_serializes_with_type_tag() {
    let event = HumanRequiredEvent::PolicyConflict {
        collision_id: "c9".into(),
        field: "retention".into(),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "POLICY_CONFLICT");
    assert_eq!(value["collision_id"], "c9");
}

#[test]
fn synthetic_human_event_is_system_attributed() {
    let escalation = HumanRequiredEvent::CorruptionDetected {
        endpoint_id: "e1".into(),
        detail: "bad".into(),
    };
    let event = EngineEvent::for_human_required(&escalation);
    assert_eq!(event.event_type, EngineEventType::HumanRequired);
    assert!(event.human_required);
    assert_eq!(event.agent_id, "system");
    assert_eq!(event.endpoint_id.as_deref(), Some("e1"));
}

#[test]
fn telemetry_event_flattens_engine_event() {
    let event = EngineEvent::new(EngineEventType::DecayScan)
        .with_branch("main")
        .with_attribute("nodesScanned", 3);
    let telemetry = TelemetryEvent::from(&event);
    let value = serde_json::to_value(&telemetry).unwrap();
    assert_eq!(value["event_type"], "DECAY_SCAN");
    assert_eq!(value["branch_name"], "main");
    assert_eq!(value["attributes"]["nodesScanned"], 3);
}

#[test]
fn bare_event_serializes_only_populated_fields() {
    let value = serde_json::to_value(EngineEvent::new(EngineEventType::DecayScan)).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["agent_id", "branch_name", "event_type", "human_required"]);
}

#[test]
fn context_index_output_passes_text_through() {
    let text = ContextIndexOutput::from("already serialized".to_string());
    assert_eq!(text.into_text().unwrap(), "already serialized");

    let structured = ContextIndexOutput::from(json!({"ok": true}));
    assert_eq!(structured.into_text().unwrap(), r#"{"ok":true}"#);
}

#[test]
fn round_score_keeps_four_decimals() {
    assert_eq!(round_score(0.123456), 0.1235);
    assert_eq!(round_score(1.0), 1.0);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(1.7), 1.0);
}
