/// Convergence promotion errors. Both indicate caller misuse.
#[derive(Debug, thiserror::Error)]
pub enum ConvergenceError {
    #[error("Convergence promotion requires at least two nodes, got {count}")]
    InsufficientNodes { count: usize },

    #[error("Convergence threshold not met: combined {combined:.4}, independence {independence:.2}")]
    ThresholdNotMet { combined: f64, independence: f64 },
}
