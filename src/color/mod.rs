//! Colour science primitives and palette extraction

/// WCAG luminance, contrast ratio and accessible colour search
pub mod contrast;
/// Colour harmony rules over hue angles
pub mod harmony;
/// Weighted k-means++ clustering of pixel colours
pub mod kmeans;
/// Dominant palette extraction with mode and style transforms
pub mod palette;
/// RGB, HLS and hex conversions
pub mod space;
