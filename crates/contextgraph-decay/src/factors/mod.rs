pub mod empirical;
pub mod structural;
pub mod temporal;

use chrono::{DateTime, Utc};

use contextgraph_core::models::SchemaEndpoint;

/// Inputs to a decay computation besides the node itself.
///
/// `now` is explicit so scores are reproducible.
#[derive(Debug, Clone)]
pub struct DecayContext {
    pub now: DateTime<Utc>,
    /// Endpoint the node is grounded against.
    pub endpoint: SchemaEndpoint,
}

impl DecayContext {
    pub fn new(now: DateTime<Utc>, endpoint: SchemaEndpoint) -> Self {
        Self { now, endpoint }
    }
}

impl Default for DecayContext {
    fn default() -> Self {
        Self {
            now: Utc::now(),
            endpoint: SchemaEndpoint::unknown(),
        }
    }
}
