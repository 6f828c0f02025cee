//! Input/output edge: configuration, decoding, errors and the command line

/// Command-line arguments and the batch processor
pub mod cli;
/// Tuning constants and defaults
pub mod configuration;
/// Error types for fallible operations
pub mod error;
/// Image decoding and pixel views
pub mod image;
/// Terminal progress display
pub mod progress;
