//! # contextgraph-convergence
//!
//! When two agents independently arrive at the same claim, that agreement is
//! strong evidence. This crate scores node pairs for agreement and promotes
//! agreeing pairs to a canonical node. Source nodes are never deleted.

pub mod detector;
pub mod scoring;

pub use detector::ConvergenceDetector;
pub use scoring::{best_candidate, compute_score};
