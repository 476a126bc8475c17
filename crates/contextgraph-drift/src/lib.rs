//! # contextgraph-drift
//!
//! Classifies changes to an oracle's operation set and maps each severity to
//! a remediation policy. Corruption is the only outcome that needs a human.

pub mod classification;
pub mod detector;
pub mod remediation;

pub use classification::{affected_operations, classify};
pub use detector::DriftDetector;
