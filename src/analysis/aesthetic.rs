//! Aesthetic quality scoring seam
//!
//! A real scorer would send the encoded image to an external model. The
//! bundled [`SimulatedScorer`] returns a fixed neutral answer so the pipeline
//! stays deterministic and offline.

use serde::Serialize;

/// Lowest score a scorer may report
pub const MIN_AESTHETIC_SCORE: u8 = 1;
/// Highest score a scorer may report
pub const MAX_AESTHETIC_SCORE: u8 = 10;

/// Score reported for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AestheticScore {
    /// Score in `1..=10`, or `None` when the image could not be scored
    pub score: Option<u8>,
    /// Reasoning supplied by the scorer
    pub explanation: String,
}

impl AestheticScore {
    /// Score clamped into the valid range
    pub fn new(score: i64, explanation: impl Into<String>) -> Self {
        let clamped = score.clamp(
            i64::from(MIN_AESTHETIC_SCORE),
            i64::from(MAX_AESTHETIC_SCORE),
        );
        Self {
            score: u8::try_from(clamped).ok(),
            explanation: explanation.into(),
        }
    }

    /// Record for an image that was never scored
    pub fn unscored(explanation: impl Into<String>) -> Self {
        Self {
            score: None,
            explanation: explanation.into(),
        }
    }
}

/// Rates the visual quality of an encoded image
pub trait AestheticScorer {
    /// Score `image_bytes` encoded as `mime_type`
    ///
    /// Implementations must not fail; unreachable services should answer
    /// with [`AestheticScore::unscored`].
    fn score_image(&self, image_bytes: &[u8], mime_type: &str) -> AestheticScore;
}

/// Offline scorer that rates every image as neutral
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedScorer;

impl AestheticScorer for SimulatedScorer {
    fn score_image(&self, image_bytes: &[u8], mime_type: &str) -> AestheticScore {
        tracing::debug!(
            bytes = image_bytes.len(),
            mime_type,
            "Simulating aesthetic score"
        );
        AestheticScore::new(5, "Simulated: Neutral aesthetic quality.")
    }
}
