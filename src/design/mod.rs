//! Design decisions derived from aggregated image features

/// Interactive component suggestions per layout style
pub mod components;
/// Font pairing catalog, scoring and type scale
pub mod fonts;
/// Brand guideline parsing and inference
pub mod guidelines;
/// Layout style, spacing and utility classes
pub mod layout;
