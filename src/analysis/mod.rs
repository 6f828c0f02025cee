//! Per-image metric extraction, tag inference and batch aggregation

/// Aesthetic scoring seam and the offline scorer
pub mod aesthetic;
/// Batch means and tag unions over per-image metrics
pub mod aggregate;
/// Builds the per-image metrics record
pub mod analyzer;
/// Box-counting fractal dimension
pub mod fractal;
/// Symmetry, whitespace, entropy and balance measurements
pub mod metrics;
/// Descriptor vocabulary and threshold-based tag inference
pub mod tags;
