mod collision_error;
mod convergence_error;
mod graph_error;
mod telemetry_error;

pub use collision_error::CollisionError;
pub use convergence_error::ConvergenceError;
pub use graph_error::GraphError;
pub use telemetry_error::TelemetryError;

/// Convenience alias used across the workspace.
pub type GraphResult<T> = Result<T, GraphError>;
