//! Batch-level feature aggregation
//!
//! Each numeric field is averaged over the images that produced it, so one
//! image missing a value does not drop its other values from their means.

use serde::Serialize;

use crate::analysis::analyzer::ImageMetrics;
use crate::analysis::tags::{Descriptor, DescriptorSet};
use crate::io::configuration::{
    BUSY_ENTROPY, COMPLEX_FRACTAL_DIMENSION, DEFAULT_AESTHETIC_SCORE, DEFAULT_BALANCE,
    DEFAULT_ENTROPY, DEFAULT_FRACTAL_DIMENSION, DEFAULT_SYMMETRY, DEFAULT_WHITESPACE_PERCENTAGE,
    SIMPLE_ENTROPY, SIMPLE_FRACTAL_DIMENSION,
};
use crate::math::statistics::mean_or;

/// Averaged features of an image batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedFeatures {
    /// Mean whitespace as a fraction in `[0, 1]`
    pub whitespace: f64,
    /// Mean top/bottom symmetry
    pub symmetry_horizontal: f64,
    /// Mean left/right symmetry
    pub symmetry_vertical: f64,
    /// Mean fractal dimension
    pub fractal_dimension: f64,
    /// Mean entropy in bits
    pub entropy: f64,
    /// Mean visual balance
    pub visual_balance: f64,
    /// Mean aesthetic score
    pub aesthetic_score: f64,
    /// True if any image had golden proportions
    pub golden_ratio_match: bool,
    /// Union of inferred typography styles
    pub typography: DescriptorSet,
    /// Union of inferred moods
    pub moods: DescriptorSet,
    /// Number of images aggregated, analysable or not
    pub image_count: usize,
}

impl Default for AggregatedFeatures {
    fn default() -> Self {
        Self {
            whitespace: DEFAULT_WHITESPACE_PERCENTAGE / 100.0,
            symmetry_horizontal: DEFAULT_SYMMETRY,
            symmetry_vertical: DEFAULT_SYMMETRY,
            fractal_dimension: DEFAULT_FRACTAL_DIMENSION,
            entropy: DEFAULT_ENTROPY,
            visual_balance: DEFAULT_BALANCE,
            aesthetic_score: DEFAULT_AESTHETIC_SCORE,
            golden_ratio_match: false,
            typography: DescriptorSet::new(),
            moods: DescriptorSet::new(),
            image_count: 0,
        }
    }
}

impl AggregatedFeatures {
    /// Whether any image suggested this mood
    pub fn has_mood(&self, mood: Descriptor) -> bool {
        self.moods.contains(&mood)
    }

    /// Whether any image suggested this typography style
    pub fn has_typography(&self, style: Descriptor) -> bool {
        self.typography.contains(&style)
    }

    /// High fractal dimension or entropy
    pub const fn is_busy(&self) -> bool {
        self.fractal_dimension > COMPLEX_FRACTAL_DIMENSION || self.entropy > BUSY_ENTROPY
    }

    /// Low fractal dimension or entropy
    pub const fn is_simple(&self) -> bool {
        self.fractal_dimension < SIMPLE_FRACTAL_DIMENSION || self.entropy < SIMPLE_ENTROPY
    }
}

/// Combine per-image metrics into one feature record
pub fn aggregate_features(metrics: &[ImageMetrics]) -> AggregatedFeatures {
    let collect = |field: fn(&ImageMetrics) -> Option<f64>| -> Vec<f64> {
        metrics.iter().filter_map(field).collect()
    };

    let whitespace = collect(|m| m.whitespace_percentage);
    let aesthetic = collect(|m| m.aesthetic_neural_score.score.map(f64::from));

    AggregatedFeatures {
        whitespace: mean_or(&whitespace, DEFAULT_WHITESPACE_PERCENTAGE) / 100.0,
        symmetry_horizontal: mean_or(&collect(|m| m.symmetry.horizontal), DEFAULT_SYMMETRY),
        symmetry_vertical: mean_or(&collect(|m| m.symmetry.vertical), DEFAULT_SYMMETRY),
        fractal_dimension: mean_or(
            &collect(|m| m.fractal_dimension),
            DEFAULT_FRACTAL_DIMENSION,
        ),
        entropy: mean_or(&collect(|m| m.entropy), DEFAULT_ENTROPY),
        visual_balance: mean_or(&collect(|m| m.visual_balance_score), DEFAULT_BALANCE),
        aesthetic_score: mean_or(&aesthetic, DEFAULT_AESTHETIC_SCORE),
        golden_ratio_match: metrics.iter().any(|m| m.golden_ratio_aspect_match),
        typography: metrics
            .iter()
            .flat_map(|m| m.typography_inference.iter().copied())
            .collect(),
        moods: metrics
            .iter()
            .flat_map(|m| m.mood_emotion.iter().copied())
            .collect(),
        image_count: metrics.len(),
    }
}
