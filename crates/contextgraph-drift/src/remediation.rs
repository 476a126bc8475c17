use contextgraph_core::models::{DriftEvent, DriftSeverity, HumanRequiredEvent, RemediationResult};

const CORRUPTION_DETAIL: &str = "Type map corruption detected";

/// Decide the remediation for a drift event.
///
/// Returns the escalation to raise alongside the result, if any.
pub fn plan(event: &DriftEvent) -> (RemediationResult, Option<HumanRequiredEvent>) {
    match event.severity {
        DriftSeverity::Corruption => (
            RemediationResult {
                action: DriftSeverity::Corruption.remediation_policy(),
                requires_human: true,
                message: "Corruption detected; blocking until human review.".to_string(),
            },
            Some(HumanRequiredEvent::CorruptionDetected {
                endpoint_id: event.endpoint_id.clone(),
                detail: CORRUPTION_DETAIL.to_string(),
            }),
        ),
        DriftSeverity::Breaking
        | DriftSeverity::Deprecation
        | DriftSeverity::Additive
        | DriftSeverity::Silent => {
            let action = event.remediation_policy;
            (
                RemediationResult {
                    action,
                    requires_human: false,
                    message: format!("Applied remediation policy {action}."),
                },
                None,
            )
        }
    }
}
