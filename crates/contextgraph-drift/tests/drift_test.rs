use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

use contextgraph_core::errors::GraphError;
use contextgraph_core::models::{
    DriftEvent, DriftSeverity, EngineEventType, HumanRequiredEvent, RemediationPolicy, TypeMap,
    TypeMapPair,
};
use contextgraph_drift::DriftDetector;
use contextgraph_events::EventBus;
use test_fixtures::{
    load_fixture, FailingSource, InMemoryDriftSource, ReadOnlyDriftSource, RecordingBackend,
};

#[derive(Deserialize)]
struct ClassificationFixture {
    cases: Vec<ClassificationCase>,
}

#[derive(Deserialize)]
struct ClassificationCase {
    name: String,
    before: TypeMap,
    after: TypeMap,
    severity: DriftSeverity,
    remediation_policy: RemediationPolicy,
    affected_operations: Vec<String>,
}

fn event(severity: DriftSeverity) -> DriftEvent {
    DriftEvent {
        endpoint_id: "users-api".to_string(),
        severity,
        affected_operations: vec![],
        remediation_policy: severity.remediation_policy(),
        detected_at: Utc::now(),
    }
}

#[tokio::test]
async fn golden_classification_cases() {
    let fixture: ClassificationFixture = load_fixture("golden/drift/classification.json");
    for case in fixture.cases {
        let source = InMemoryDriftSource::new().with_pair(
            "ep",
            TypeMapPair {
                before: case.before,
                after: case.after,
            },
        );
        let detector = DriftDetector::new(Arc::new(source));

        let event = detector.detect("ep").await.unwrap();

        assert_eq!(event.severity, case.severity, "{}", case.name);
        assert_eq!(event.remediation_policy, case.remediation_policy, "{}", case.name);
        assert_eq!(event.affected_operations, case.affected_operations, "{}", case.name);
    }
}

#[tokio::test]
async fn detect_notifies_data_source_of_severity() {
    let mut after = TypeMap::new("h2", &["getUser"]);
    after.removed = vec!["listUsers".to_string()];
    let source = Arc::new(InMemoryDriftSource::new().with_pair(
        "users-api",
        TypeMapPair {
            before: TypeMap::new("h1", &["getUser", "listUsers"]),
            after,
        },
    ));
    let detector = DriftDetector::new(source.clone());

    let event = detector.detect("users-api").await.unwrap();

    assert_eq!(event.endpoint_id, "users-api");
    assert_eq!(
        source.updates(),
        vec![("users-api".to_string(), DriftSeverity::Breaking)]
    );
}

#[tokio::test]
async fn update_endpoint_defaults_to_no_op() {
    let detector = DriftDetector::new(Arc::new(ReadOnlyDriftSource(TypeMapPair {
        before: TypeMap::new("h1", &["a"]),
        after: TypeMap::new("h1", &["a"]),
    })));

    let event = detector.detect("ep").await.unwrap();

    assert_eq!(event.severity, DriftSeverity::Silent);
    assert!(event.affected_operations.is_empty());
}

#[tokio::test]
async fn data_source_errors_propagate() {
    let detector = DriftDetector::new(Arc::new(FailingSource));
    let err = detector.detect("ep").await.unwrap_err();
    assert!(matches!(err, GraphError::DataSource { .. }));
}

#[tokio::test]
async fn detect_reports_drift_telemetry() {
    let backend = Arc::new(RecordingBackend::new());
    let bus = Arc::new(EventBus::with_telemetry(backend.clone()));
    let mut after = TypeMap::new("h2", &["getUser", "getOrg"]);
    after.added = vec!["getOrg".to_string()];
    let source = InMemoryDriftSource::new().with_pair(
        "users-api",
        TypeMapPair {
            before: TypeMap::new("h1", &["getUser"]),
            after,
        },
    );
    let detector = DriftDetector::new(Arc::new(source)).with_events(bus);

    detector.detect("users-api").await.unwrap();

    let recorded = backend.of_type(EngineEventType::DriftDetect);
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].event.severity, Some(DriftSeverity::Additive));
    assert_eq!(recorded[0].event.attributes["affectedOperationCount"], 1);
}

// ── Remediation ──────────────────────────────────────────────────────────

#[test]
fn non_corruption_remediation_is_applied_automatically() {
    let detector = DriftDetector::new(Arc::new(InMemoryDriftSource::new()));
    for (severity, action) in [
        (DriftSeverity::Breaking, RemediationPolicy::PauseNotify),
        (DriftSeverity::Deprecation, RemediationPolicy::Reground),
        (DriftSeverity::Additive, RemediationPolicy::AutoSync),
        (DriftSeverity::Silent, RemediationPolicy::AutoSync),
    ] {
        let result = detector.remediate(&event(severity));
        assert_eq!(result.action, action);
        assert!(!result.requires_human);
        assert_eq!(result.message, format!("Applied remediation policy {action}."));
    }
}

#[tokio::test]
async fn corruption_rolls_back_and_escalates() {
    let bus = Arc::new(EventBus::new());
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    bus.on_human_required(move |escalation| {
        let tx = tx.clone();
        async move {
            let _ = tx.send(escalation);
        }
    });
    let detector = DriftDetector::new(Arc::new(InMemoryDriftSource::new())).with_events(bus);

    let result = detector.remediate(&event(DriftSeverity::Corruption));

    assert_eq!(result.action, RemediationPolicy::Rollback);
    assert!(result.requires_human);
    let escalation = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        escalation,
        HumanRequiredEvent::CorruptionDetected {
            endpoint_id: "users-api".to_string(),
            detail: "Type map corruption detected".to_string(),
        }
    );
}

#[test]
fn corruption_without_bus_still_requires_human() {
    let detector = DriftDetector::new(Arc::new(InMemoryDriftSource::new()));
    let result = detector.remediate(&event(DriftSeverity::Corruption));
    assert!(result.requires_human);
    assert_eq!(result.action, RemediationPolicy::Rollback);
}
