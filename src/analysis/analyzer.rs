//! Per-image metric extraction

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::aesthetic::{AestheticScore, AestheticScorer};
use crate::analysis::fractal::fractal_dimension;
use crate::analysis::metrics::{
    aspect_ratio, horizontal_symmetry, image_entropy, is_golden_ratio, vertical_symmetry,
    visual_balance, whitespace_percentage,
};
use crate::analysis::tags::{DescriptorSet, TagInputs, infer_mood, infer_typography};
use crate::io::image::{PNG_MIME_TYPE, SourceImage};
use crate::math::statistics::round_to;

/// Mirror similarity on both axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Symmetry {
    /// Top half against the flipped bottom half
    pub horizontal: Option<f64>,
    /// Left half against the flipped right half
    pub vertical: Option<f64>,
}

/// Everything measured about one image
///
/// Numeric fields are `None` when the image could not be analysed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMetrics {
    /// Path or label of the analysed image
    pub source: String,
    /// Mirror similarity
    pub symmetry: Symmetry,
    /// Near-white or near-black share in `[0, 100]`
    pub whitespace_percentage: Option<f64>,
    /// Width over height
    pub aspect_ratio: Option<f64>,
    /// Whether the aspect ratio is close to the golden ratio
    pub golden_ratio_aspect_match: bool,
    /// Box-counting dimension of the dark pixels
    pub fractal_dimension: Option<f64>,
    /// Shannon entropy of the intensity histogram in bits
    pub entropy: Option<f64>,
    /// Centring of the luminance mass in `[0, 1]`
    pub visual_balance_score: Option<f64>,
    /// Inferred typography styles
    pub typography_inference: DescriptorSet,
    /// Inferred moods
    pub mood_emotion: DescriptorSet,
    /// External quality rating
    pub aesthetic_neural_score: AestheticScore,
}

impl ImageMetrics {
    /// Record for an image that could not be analysed
    pub fn unavailable(source: impl Into<String>, reason: &str) -> Self {
        Self {
            source: source.into(),
            symmetry: Symmetry::default(),
            whitespace_percentage: None,
            aspect_ratio: None,
            golden_ratio_aspect_match: false,
            fractal_dimension: None,
            entropy: None,
            visual_balance_score: None,
            typography_inference: DescriptorSet::new(),
            mood_emotion: DescriptorSet::new(),
            aesthetic_neural_score: AestheticScore::unscored(format!("Not calculated: {reason}")),
        }
    }
}

/// Measure one image and ask `scorer` for its aesthetic rating
///
/// Images without pixels yield an unavailable record.
pub fn analyze_image<S: AestheticScorer + ?Sized>(image: &SourceImage, scorer: &S) -> ImageMetrics {
    let (width, height) = image.dimensions();
    let Some(average_rgb) = image.average_rgb() else {
        warn!(source = image.label(), "Image has no pixels, skipping analysis");
        return ImageMetrics::unavailable(image.label(), "image has no pixels");
    };

    let gray = image.grayscale();
    let view = gray.view();

    let ratio = aspect_ratio(width, height);
    let symmetry_horizontal = horizontal_symmetry(view);
    let symmetry_vertical = vertical_symmetry(view);
    let whitespace = whitespace_percentage(view);

    let tag_inputs = TagInputs {
        whitespace_percentage: whitespace,
        symmetry_horizontal,
        symmetry_vertical,
        average_rgb,
    };

    let aesthetic_neural_score = match image.encode_png() {
        Ok(bytes) => scorer.score_image(&bytes, PNG_MIME_TYPE),
        Err(error) => {
            warn!(source = image.label(), %error, "Aesthetic scoring skipped");
            AestheticScore::unscored(format!("Not calculated: {error}"))
        }
    };

    let metrics = ImageMetrics {
        source: image.label().to_string(),
        symmetry: Symmetry {
            horizontal: Some(symmetry_horizontal),
            vertical: Some(symmetry_vertical),
        },
        whitespace_percentage: Some(whitespace),
        aspect_ratio: ratio,
        golden_ratio_aspect_match: ratio.is_some_and(is_golden_ratio),
        fractal_dimension: Some(round_to(fractal_dimension(view), 3)),
        entropy: Some(round_to(image_entropy(view), 3)),
        visual_balance_score: Some(round_to(visual_balance(view), 3)),
        typography_inference: infer_typography(&tag_inputs),
        mood_emotion: infer_mood(&tag_inputs),
        aesthetic_neural_score,
    };

    debug!(
        source = image.label(),
        whitespace,
        fractal = ?metrics.fractal_dimension,
        entropy = ?metrics.entropy,
        "Analysed image"
    );

    metrics
}
