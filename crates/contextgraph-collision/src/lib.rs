//! # contextgraph-collision
//!
//! Classifies conflicts between two knowledge branches and picks a
//! resolution strategy. Epistemic and policy collisions escalate to a human.

pub mod detector;
pub mod strategy;

pub use detector::CollisionDetector;
pub use strategy::{escalation_for, resolution_for};
