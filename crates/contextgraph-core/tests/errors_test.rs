use contextgraph_core::errors::*;

#[test]
fn node_not_found_carries_id() {
    let err = GraphError::NodeNotFound {
        id: "node-42".into(),
    };
    assert!(err.to_string().contains("node-42"));
}

#[test]
fn data_source_helper_carries_name_and_reason() {
    let err = GraphError::data_source("decay", "connection reset");
    let msg = err.to_string();
    assert!(msg.contains("decay"));
    assert!(msg.contains("connection reset"));
}

#[test]
fn threshold_not_met_reads_like_the_contract() {
    let err = ConvergenceError::ThresholdNotMet {
        combined: 0.7,
        independence: 0.2,
    };
    assert!(err.to_string().starts_with("Convergence threshold not met"));
}

#[test]
fn insufficient_nodes_carries_count() {
    let err = ConvergenceError::InsufficientNodes { count: 1 };
    assert!(err.to_string().contains("at least two nodes"));
    assert!(err.to_string().contains('1'));
}

// --- From impls ---

#[test]
fn convergence_error_converts_to_graph_error() {
    let err: GraphError = ConvergenceError::InsufficientNodes { count: 0 }.into();
    assert!(matches!(err, GraphError::ConvergenceError(_)));
}

#[test]
fn collision_error_converts_to_graph_error() {
    let err: GraphError = CollisionError::UnknownKind {
        kind: "MYSTERY".into(),
    }
    .into();
    assert!(matches!(err, GraphError::CollisionError(_)));
    assert!(err.to_string().contains("MYSTERY"));
}

#[test]
fn telemetry_error_converts_to_graph_error() {
    let err: GraphError = TelemetryError::FlushFailed {
        backend: "clickhouse".into(),
        reason: "timeout".into(),
    }
    .into();
    assert!(matches!(err, GraphError::TelemetryError(_)));
}

#[test]
fn serde_error_converts_to_graph_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: GraphError = serde_err.into();
    assert!(matches!(err, GraphError::SerializationError(_)));
}
