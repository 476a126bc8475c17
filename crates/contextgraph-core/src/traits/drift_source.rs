use async_trait::async_trait;

use crate::errors::GraphResult;
use crate::models::{DriftSeverity, TypeMapPair};

/// Source of endpoint type maps for drift detection.
#[async_trait]
pub trait DriftDataSource: Send + Sync {
    /// Load the previous and current type maps for an endpoint.
    async fn load_type_map(&self, endpoint_id: &str) -> GraphResult<TypeMapPair>;

    /// Persist the classified severity. Optional; the default does nothing.
    async fn update_endpoint(&self, _endpoint_id: &str, _severity: DriftSeverity) -> GraphResult<()> {
        Ok(())
    }
}
