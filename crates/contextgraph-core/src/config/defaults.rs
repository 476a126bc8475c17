//! Default values for every config field.

use crate::constants;

pub const DEFAULT_TOMBSTONE_THRESHOLD: f64 = constants::TOMBSTONE_THRESHOLD;
pub const DEFAULT_TEMPORAL_HORIZON_DAYS: f64 = constants::DECAY_TEMPORAL_HORIZON_DAYS;

pub const DEFAULT_PROMOTION_THRESHOLD: f64 = constants::PROMOTION_THRESHOLD;
pub const DEFAULT_MIN_INDEPENDENCE: f64 = constants::MIN_PROMOTION_INDEPENDENCE;

pub const DEFAULT_CONTEXT_MAX_TOKENS: usize = constants::CONTEXT_INDEX_MAX_TOKENS;

pub const DEFAULT_MEMORY_TELEMETRY_CAPACITY: usize = constants::MEMORY_TELEMETRY_CAPACITY;

pub const DEFAULT_LOG_LEVEL: &str = "info";
