/// Actor recorded on telemetry the engine synthesizes itself.
pub const SYSTEM_ACTOR: &str = "system";

/// Placeholder for identifiers a collaborator did not supply.
pub const UNKNOWN: &str = "unknown";

/// Scores are rounded to this many decimal places.
pub const SCORE_DECIMALS: i32 = 4;

// --- Decay ---

/// Combined decay at or above which a node is tombstoned.
pub const TOMBSTONE_THRESHOLD: f64 = 0.95;

/// Age (days) at which temporal decay saturates at 1.0.
pub const DECAY_TEMPORAL_HORIZON_DAYS: f64 = 30.0;

pub const DECAY_WEIGHT_TEMPORAL: f64 = 0.4;
pub const DECAY_WEIGHT_STRUCTURAL: f64 = 0.3;
pub const DECAY_WEIGHT_EMPIRICAL: f64 = 0.3;

/// Structural decay for a node with no recorded isomorphisms.
pub const STRUCTURAL_DECAY_UNCORROBORATED: f64 = 1.0;

/// Structural decay for a node with at least one isomorphism.
pub const STRUCTURAL_DECAY_CORROBORATED: f64 = 0.3;

/// Confidence assumed when a node does not carry one.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

// --- Convergence ---

pub const CONVERGENCE_WEIGHT_STRUCTURAL: f64 = 0.4;
pub const CONVERGENCE_WEIGHT_EVIDENTIAL: f64 = 0.3;
pub const CONVERGENCE_WEIGHT_INDEPENDENCE: f64 = 0.3;

/// Independence score for nodes from distinct agents with disjoint evidence.
pub const INDEPENDENT_SCORE: f64 = 1.0;

/// Independence score for every other pair.
pub const DEPENDENT_SCORE: f64 = 0.2;

/// Combined convergence must be strictly above this to promote.
pub const PROMOTION_THRESHOLD: f64 = 0.85;

/// Independence must be at least this to promote.
pub const MIN_PROMOTION_INDEPENDENCE: f64 = 0.5;

// --- Context index ---

/// Token budget for a serialized context index.
pub const CONTEXT_INDEX_MAX_TOKENS: usize = 200;

/// Rough characters-per-token ratio used for budget estimates.
pub const CHARS_PER_TOKEN: usize = 4;

/// Capacity of the in-memory telemetry ring.
pub const MEMORY_TELEMETRY_CAPACITY: usize = 1024;
