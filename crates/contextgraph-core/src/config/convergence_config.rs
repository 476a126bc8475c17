//! Configuration for convergence promotion.
//!
//! # Examples
//!
//! ```
//! use contextgraph_core::config::ConvergenceConfig;
//!
//! let config = ConvergenceConfig::default();
//! assert!((config.promotion_threshold - 0.85).abs() < f64::EPSILON);
//! assert!((config.min_independence - 0.5).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds a scored pair must pass before it is promoted to a canonical node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// Combined score must be strictly greater than this. Default: 0.85.
    pub promotion_threshold: f64,
    /// Independence component must be at least this. Default: 0.5.
    pub min_independence: f64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            promotion_threshold: defaults::DEFAULT_PROMOTION_THRESHOLD,
            min_independence: defaults::DEFAULT_MIN_INDEPENDENCE,
        }
    }
}
