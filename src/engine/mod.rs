//! Orchestration from image batch to theme decision

/// Analyses a batch and assembles the decision record
pub mod generator;
