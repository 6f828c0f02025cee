//! Derives a web theme from a batch of images
//!
//! Each image is measured for composition (symmetry, whitespace, fractal
//! dimension, entropy, balance) and tagged with typography and mood
//! descriptors. The batch is aggregated and drives a colour palette with
//! contrast checks, a font pairing with a type scale, a layout with spacing
//! and utility classes, and a list of suggested components.

/// Per-image metrics, tags and batch aggregation
pub mod analysis;
/// Colour spaces, clustering, contrast and harmony
pub mod color;
/// Typography, layout, component and guideline decisions
pub mod design;
/// Theme generation pipeline
pub mod engine;
/// Input/output operations and error handling
pub mod io;
/// Regression and descriptive statistics
pub mod math;

pub use io::error::{Result, ThemeError};
