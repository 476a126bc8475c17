use std::sync::Arc;

use contextgraph_core::models::{
    DriftSeverity, EngineEvent, EngineEventType, HumanRequiredEvent, ResolutionStrategy,
};
use contextgraph_events::metrics::Histogram;
use contextgraph_events::telemetry::{
    CollisionResolveAttributes, ConvergencePromoteAttributes, DecayScanAttributes,
    DriftDetectAttributes, SessionResumeAttributes,
};
use contextgraph_events::{EventBus, MetricsCollector};
use test_fixtures::RecordingBackend;

fn session(tokens: usize, duration_ms: u64) -> SessionResumeAttributes {
    SessionResumeAttributes {
        agent_id: "agent-1".to_string(),
        branch: "main".to_string(),
        index_token_count: tokens,
        drift_status: "ok".to_string(),
        duration_ms,
    }
}

#[tokio::test]
async fn counters_follow_each_lifecycle_event() {
    let bus = EventBus::with_telemetry(Arc::new(RecordingBackend::new()));

    for severity in [DriftSeverity::Corruption, DriftSeverity::Additive, DriftSeverity::Additive] {
        bus.report(DriftDetectAttributes {
            endpoint_id: "users-api".to_string(),
            severity,
            affected_operation_count: 1,
        })
        .await;
    }
    bus.report(CollisionResolveAttributes {
        collision_id: "c-1".to_string(),
        collision_class: "EPISTEMIC".to_string(),
        resolution_strategy: ResolutionStrategy::HumanArbitration,
        requires_human: true,
    })
    .await;
    bus.report(DecayScanAttributes {
        branch_name: "main".to_string(),
        nodes_scanned: 4,
        nodes_tombstoned: 3,
    })
    .await;
    bus.report(ConvergencePromoteAttributes {
        topic: "auth".to_string(),
        contributing_agents: vec!["agent-a".to_string(), "agent-b".to_string()],
        convergence_score: 0.9,
    })
    .await;
    bus.report(session(40, 12)).await;
    bus.report(EngineEvent::new(EngineEventType::CommitKnowledge)).await;

    let metrics = bus.metrics();
    assert_eq!(metrics.drift.events_total, 3);
    assert_eq!(metrics.drift.count("CORRUPTION"), 1);
    assert_eq!(metrics.drift.count("ADDITIVE"), 2);
    assert_eq!(metrics.drift.count("BREAKING"), 0);
    assert_eq!(metrics.collision.resolutions_total, 1);
    assert_eq!(metrics.collision.count("EPISTEMIC"), 1);
    assert_eq!(metrics.maintenance.decay_scans_total, 1);
    assert_eq!(metrics.maintenance.decay_tombstones_total, 3);
    assert_eq!(metrics.maintenance.convergence_promotions_total, 1);
    assert_eq!(metrics.session.resumes_total, 1);
    assert_eq!(metrics.session.context_index_tokens.sum, 40.0);
    assert_eq!(metrics.session.session_duration_ms.max, 12.0);
    assert_eq!(metrics.escalation.human_required_total, 0);
}

#[test]
fn escalations_are_counted_by_type_without_a_backend() {
    let bus = EventBus::new();
    bus.emit_human_required(HumanRequiredEvent::CorruptionDetected {
        endpoint_id: "users-api".to_string(),
        detail: "hash mismatch".to_string(),
    });
    bus.emit_human_required(HumanRequiredEvent::EpistemicCollision {
        collision_id: "c-1".to_string(),
        detail: "claims disagree".to_string(),
    });
    bus.emit_human_required(HumanRequiredEvent::EpistemicCollision {
        collision_id: "c-2".to_string(),
        detail: "claims disagree".to_string(),
    });

    let metrics = bus.metrics();
    assert_eq!(metrics.escalation.human_required_total, 3);
    assert_eq!(metrics.escalation.count("EPISTEMIC_COLLISION"), 2);
    assert_eq!(metrics.escalation.count("CORRUPTION_DETECTED"), 1);
    assert_eq!(metrics.escalation.count("POLICY_CONFLICT"), 0);
    // Escalations are not collision resolutions.
    assert_eq!(metrics.collision.resolutions_total, 0);
}

#[tokio::test]
async fn reset_clears_every_counter() {
    let bus = EventBus::new();
    bus.report(session(10, 1)).await;
    bus.emit_human_required(HumanRequiredEvent::PolicyConflict {
        collision_id: "c-1".to_string(),
        field: "retention".to_string(),
    });
    assert_ne!(bus.metrics(), MetricsCollector::new());

    bus.reset_metrics();
    assert_eq!(bus.metrics(), MetricsCollector::new());
}

#[tokio::test]
async fn snapshot_is_detached_from_later_events() {
    let bus = EventBus::new();
    bus.report(session(10, 1)).await;
    let before = bus.metrics();
    bus.report(session(30, 5)).await;

    assert_eq!(before.session.resumes_total, 1);
    assert_eq!(bus.metrics().session.resumes_total, 2);
}

#[test]
fn drift_without_severity_counts_as_unknown() {
    let mut metrics = MetricsCollector::new();
    metrics.observe(&EngineEvent::new(EngineEventType::DriftDetect));
    assert_eq!(metrics.drift.count("unknown"), 1);
}

#[test]
fn histogram_tracks_min_max_and_mean() {
    let mut histogram = Histogram::default();
    assert_eq!(histogram.mean(), 0.0);

    for value in [30.0, 10.0, 20.0] {
        histogram.record(value);
    }
    assert_eq!(histogram.count, 3);
    assert_eq!(histogram.min, 10.0);
    assert_eq!(histogram.max, 30.0);
    assert!((histogram.mean() - 20.0).abs() < f64::EPSILON);
}

#[test]
fn snapshot_serializes_by_domain() {
    let mut metrics = MetricsCollector::new();
    metrics.observe(&EngineEvent::from(DriftDetectAttributes {
        endpoint_id: "users-api".to_string(),
        severity: DriftSeverity::Breaking,
        affected_operation_count: 2,
    }));

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["drift"]["events_total"], 1);
    assert_eq!(json["drift"]["by_severity"]["BREAKING"], 1);
    assert!(json["session"]["context_index_tokens"].is_object());
}
