//! WCAG 2.0 luminance, contrast ratio and accessible colour search

use std::cmp::Ordering;

use palette::{LinSrgb, Srgb};
use serde::Serialize;

use crate::color::space::{Hls, Rgb};
use crate::io::configuration::{CONTRAST_ADJUST_ATTEMPTS, CONTRAST_ADJUST_STEP};

/// Minimum contrast for AA normal text
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast for AA large text
pub const AA_LARGE_TEXT: f64 = 3.0;
/// Minimum contrast for AAA normal text
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum contrast for AAA large text
pub const AAA_LARGE_TEXT: f64 = 4.5;

/// Relative luminance in `[0, 1]`
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear: LinSrgb<f64> = Srgb::<u8>::from(color).into_format::<f64>().into_linear();

    0.0722f64.mul_add(
        linear.blue,
        0.2126f64.mul_add(linear.red, 0.7152 * linear.green),
    )
}

/// Contrast ratio in `[1, 21]`, symmetric in its arguments
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail for each WCAG conformance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WcagCompliance {
    /// AA for normal-size text
    pub aa_normal_text: bool,
    /// AA for large text
    pub aa_large_text: bool,
    /// AAA for normal-size text
    pub aaa_normal_text: bool,
    /// AAA for large text
    pub aaa_large_text: bool,
}

impl WcagCompliance {
    /// Evaluate a contrast ratio against every tier
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa_normal_text: ratio >= AA_NORMAL_TEXT,
            aa_large_text: ratio >= AA_LARGE_TEXT,
            aaa_normal_text: ratio >= AAA_NORMAL_TEXT,
            aaa_large_text: ratio >= AAA_LARGE_TEXT,
        }
    }
}

/// Walk `foreground`'s lightness until it reaches `target` contrast on `background`
///
/// Each step moves away from the background: a colour darker than the
/// background is darkened further, a lighter one is lightened. The last
/// attempt is returned even when the target is never reached, so callers must
/// re-check the ratio.
pub fn suggest_accessible_color(foreground: Rgb, background: Rgb, target: f64) -> Rgb {
    let start = foreground.to_hls();
    let mut lightness = start.lightness;
    let background_luminance = relative_luminance(background);

    let mut current = foreground;
    for _ in 0..CONTRAST_ADJUST_ATTEMPTS {
        if contrast_ratio(current, background) >= target {
            return current;
        }

        let darken = match relative_luminance(current).partial_cmp(&background_luminance) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => background_luminance > 0.5,
        };

        lightness = if darken {
            lightness - CONTRAST_ADJUST_STEP
        } else {
            lightness + CONTRAST_ADJUST_STEP
        }
        .clamp(0.0, 1.0);

        current = Rgb::from_hls(Hls {
            lightness,
            ..start
        });
    }

    current
}
