//! Numeric helpers shared by the metrics

/// Least-squares line fitting
pub mod regression;
/// Means, rounding and entropy
pub mod statistics;
