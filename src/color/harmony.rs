//! Rule-based colour harmony scoring
//!
//! Rules are additive: a palette may be both analogous and monochromatic and
//! collects the bonus of each. The final score is clamped to `[0, 10]`.

use serde::Serialize;

use crate::color::space::Rgb;
use crate::io::configuration::{
    HARMONY_ANALOGOUS_MAX_GAP, HARMONY_FALLBACK_SCORE, HARMONY_HUE_TOLERANCE,
    HARMONY_MONOCHROMATIC_SPREAD,
};
use crate::math::statistics::round_to;

/// Harmony score with a human-readable account of the rules that fired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonyScore {
    /// Score in `[0, 10]`
    pub score: f64,
    /// One sentence per matched rule
    pub explanation: String,
}

impl HarmonyScore {
    /// Zero score with an explanation
    pub fn empty(explanation: &str) -> Self {
        Self {
            score: 0.0,
            explanation: explanation.to_string(),
        }
    }
}

const fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Score how well a set of colours harmonise
pub fn color_harmony_score(colors: &[Rgb]) -> HarmonyScore {
    match colors {
        [] => return HarmonyScore::empty("No colors provided for harmony analysis."),
        [_] => {
            return HarmonyScore {
                score: 7.0,
                explanation: "Single color palette is inherently harmonious (monochromatic)."
                    .to_string(),
            };
        }
        _ => {}
    }

    let mut hues: Vec<f64> = colors.iter().map(|c| c.to_hls().hue_degrees()).collect();
    hues.sort_by(f64::total_cmp);

    let mut score = 0.0;
    let mut explanation: Vec<String> = Vec::new();

    let lowest = hues.first().copied().unwrap_or(0.0);
    let highest = hues.last().copied().unwrap_or(0.0);
    let spread = highest - lowest;
    if spread < HARMONY_MONOCHROMATIC_SPREAD || 360.0 - spread < HARMONY_MONOCHROMATIC_SPREAD {
        score += 2.0;
        explanation.push("Monochromatic (hues are very close)".to_string());
    }

    let analogous = hues
        .iter()
        .zip(hues.iter().cycle().skip(1))
        .all(|(&a, &b)| angular_distance(a, b) <= HARMONY_ANALOGOUS_MAX_GAP);
    if analogous {
        score += 3.0;
        explanation.push("Analogous (hues are close on the color wheel)".to_string());
    }

    match hues.as_slice() {
        &[a, b] => {
            if (angular_distance(a, b) - 180.0).abs() < HARMONY_HUE_TOLERANCE {
                score += 4.0;
                explanation.push("Complementary (two main hues are opposite)".to_string());
            }
        }
        many => {
            for (i, &a) in many.iter().enumerate() {
                let partner = many
                    .iter()
                    .skip(i + 1)
                    .find(|&&b| (angular_distance(a, b) - 180.0).abs() < HARMONY_HUE_TOLERANCE);
                if let Some(&b) = partner {
                    score += 1.5;
                    explanation.push(format!(
                        "Contains a complementary pair (hues {}° and {}°)",
                        a.round_ties_even(),
                        b.round_ties_even()
                    ));
                }
            }
        }
    }

    if let &[a, b, c] = hues.as_slice() {
        let triadic = [(a, b), (b, c), (c, a)]
            .iter()
            .all(|&(x, y)| (angular_distance(x, y) - 120.0).abs() < HARMONY_HUE_TOLERANCE);
        if triadic {
            score += 5.0;
            explanation.push("Triadic (three main hues are equally spaced)".to_string());
        }
    }

    let mut score = f64::clamp(score, 0.0, 10.0);
    if explanation.is_empty() {
        explanation
            .push("No specific harmony pattern detected, but colors are present".to_string());
        score = score.max(HARMONY_FALLBACK_SCORE);
    }

    HarmonyScore {
        score: round_to(score, 2),
        explanation: format!("{}.", explanation.join(". ")),
    }
}
