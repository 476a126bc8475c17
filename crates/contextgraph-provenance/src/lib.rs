//! # contextgraph-provenance
//!
//! Answers "where did this knowledge come from" and "what did the branch
//! know at time T" from the commit lineage storage keeps.

pub mod tracker;

pub use tracker::ProvenanceTracker;
