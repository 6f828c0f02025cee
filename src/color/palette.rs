//! Palette extraction from sampled image pixels
//!
//! Pixels from every image are pooled and clustered; the three most populous
//! clusters become primary, secondary and accent. Mode and style transforms
//! are then applied before the WCAG remediation and harmony passes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::contrast::{
    AA_NORMAL_TEXT, WcagCompliance, contrast_ratio, relative_luminance, suggest_accessible_color,
};
use crate::color::harmony::{HarmonyScore, color_harmony_score};
use crate::color::kmeans::cluster_colors;
use crate::color::space::{Hls, Rgb};
use crate::io::configuration::{
    DARK_MODE_SHIFTS, DARK_TEXT_LUMINANCE, DEFAULT_SEED, LIGHT_MODE_SHIFTS, MUTED_SATURATION_FACTOR,
    PALETTE_CLUSTER_COUNT, PASTEL_LIGHTNESS_FACTOR, PASTEL_SATURATION_FACTOR,
};
use crate::math::statistics::round_to;

/// Light or dark theme bias
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Lighter backgrounds, darker accent
    #[default]
    Light,
    /// Darker backgrounds, lighter accent
    Dark,
}

/// Colour treatment applied after clustering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteStyle {
    /// Colours as clustered
    #[default]
    Vibrant,
    /// Reduced saturation
    Muted,
    /// Lighter and less saturated
    Pastel,
}

/// The three theme colours as uppercase hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColors {
    /// Dominant colour, used as the main background
    pub primary: String,
    /// Second most populous colour
    pub secondary: String,
    /// Third most populous colour
    pub accent: String,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self {
            primary: Rgb::WHITE.to_hex(),
            secondary: Rgb::LIGHT_GRAY.to_hex(),
            accent: Rgb::BLACK.to_hex(),
        }
    }
}

/// A failed AA contrast check and the suggested fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilitySuggestion {
    /// Which pairing failed
    pub issue: String,
    /// The colours involved
    pub context: String,
    /// Contrast ratio before remediation, rounded to 2 decimals
    pub current_ratio: f64,
    /// Ratio needed for AA normal text
    #[serde(rename = "required_AA")]
    pub required_aa: f64,
    /// Suggested replacement colour, not re-validated
    pub suggestion: String,
    /// Whether the original pairing met AA normal text
    #[serde(rename = "compliant_AA_normal")]
    pub compliant_aa_normal: bool,
}

/// Complete palette decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteResult {
    /// Chosen colours
    pub palette: PaletteColors,
    /// Contrast problems found in the chosen colours
    pub accessibility_suggestions: Vec<AccessibilitySuggestion>,
    /// Harmony of primary, secondary and accent
    pub color_harmony_score: HarmonyScore,
}

impl PaletteResult {
    fn fallback(explanation: &str) -> Self {
        Self {
            palette: PaletteColors::default(),
            accessibility_suggestions: Vec::new(),
            color_harmony_score: HarmonyScore::empty(explanation),
        }
    }
}

/// Palette extraction settings
#[derive(Debug, Clone, Copy)]
pub struct PaletteExtractor {
    /// Colour treatment
    pub style: PaletteStyle,
    /// Theme bias
    pub mode: ThemeMode,
    /// Seed for cluster initialisation
    pub seed: u64,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self {
            style: PaletteStyle::default(),
            mode: ThemeMode::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Extract a palette with the default seed
///
/// Each entry of `samples` holds the sampled pixels of one image.
pub fn extract_palette(samples: &[Vec<Rgb>], style: PaletteStyle, mode: ThemeMode) -> PaletteResult {
    PaletteExtractor {
        style,
        mode,
        seed: DEFAULT_SEED,
    }
    .extract(samples)
}

impl PaletteExtractor {
    /// Extract a palette from per-image pixel samples
    ///
    /// Never fails: missing images or pixels yield the white, light gray and
    /// black defaults with a zero harmony score.
    pub fn extract(&self, samples: &[Vec<Rgb>]) -> PaletteResult {
        if samples.is_empty() {
            warn!("No images provided for palette extraction, using default palette");
            return PaletteResult::fallback("No images provided for color analysis.");
        }

        let pool: Vec<Rgb> = samples.iter().flatten().copied().collect();
        if pool.is_empty() {
            warn!("No valid pixels extracted from images, using default palette");
            return PaletteResult::fallback("No valid pixels extracted for color analysis.");
        }

        let clusters = cluster_colors(&pool, PALETTE_CLUSTER_COUNT, self.seed);
        debug!(
            pixels = pool.len(),
            clusters = clusters.len(),
            "Clustered palette pixels"
        );

        let ranked = |index: usize, fallback: Rgb| {
            clusters.get(index).map_or(fallback, |c| c.color())
        };

        let [primary, secondary, accent] = self.apply_mode([
            ranked(0, Rgb::WHITE),
            ranked(1, Rgb::LIGHT_GRAY),
            ranked(2, Rgb::BLACK),
        ])
        .map(|color| self.apply_style(color));

        let palette = PaletteColors {
            primary: primary.to_hex(),
            secondary: secondary.to_hex(),
            accent: accent.to_hex(),
        };

        let accessibility_suggestions = accessibility_suggestions(primary, secondary, accent);
        let color_harmony_score = color_harmony_score(&[primary, secondary, accent]);

        PaletteResult {
            palette,
            accessibility_suggestions,
            color_harmony_score,
        }
    }

    fn apply_mode(&self, [primary, secondary, accent]: [Rgb; 3]) -> [Rgb; 3] {
        let [p, s, a] = match self.mode {
            ThemeMode::Dark => DARK_MODE_SHIFTS,
            ThemeMode::Light => LIGHT_MODE_SHIFTS,
        };
        [primary.shift(p), secondary.shift(s), accent.shift(a)]
    }

    fn apply_style(&self, color: Rgb) -> Rgb {
        let hls = color.to_hls();
        match self.style {
            PaletteStyle::Vibrant => color,
            PaletteStyle::Muted => Rgb::from_hls(Hls {
                saturation: (hls.saturation * MUTED_SATURATION_FACTOR).max(0.0),
                ..hls
            }),
            PaletteStyle::Pastel => Rgb::from_hls(Hls {
                lightness: (hls.lightness * PASTEL_LIGHTNESS_FACTOR).min(1.0),
                saturation: hls.saturation * PASTEL_SATURATION_FACTOR,
                ..hls
            }),
        }
    }
}

fn accessibility_suggestions(
    primary: Rgb,
    secondary: Rgb,
    accent: Rgb,
) -> Vec<AccessibilitySuggestion> {
    let mut suggestions = Vec::new();

    let text = if relative_luminance(primary) > DARK_TEXT_LUMINANCE {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };

    let ratio = contrast_ratio(primary, text);
    let compliance = WcagCompliance::from_ratio(ratio);
    if !compliance.aa_normal_text {
        let suggested = suggest_accessible_color(text, primary, AA_NORMAL_TEXT);
        suggestions.push(AccessibilitySuggestion {
            issue: "Primary color contrast with text".to_string(),
            context: format!("Primary background ({primary}) vs. text ({text})"),
            current_ratio: round_to(ratio, 2),
            required_aa: AA_NORMAL_TEXT,
            suggestion: format!(
                "Consider adjusting text color to {suggested} or primary background for better contrast."
            ),
            compliant_aa_normal: compliance.aa_normal_text,
        });
    }

    for (name, label, color) in [
        ("Secondary", "secondary", secondary),
        ("Accent", "accent", accent),
    ] {
        let ratio = contrast_ratio(color, primary);
        let compliance = WcagCompliance::from_ratio(ratio);
        if compliance.aa_normal_text {
            continue;
        }

        let suggested = suggest_accessible_color(color, primary, AA_NORMAL_TEXT);
        suggestions.push(AccessibilitySuggestion {
            issue: format!("{name} color contrast with Primary background"),
            context: format!("{name} element ({color}) on Primary background ({primary})"),
            current_ratio: round_to(ratio, 2),
            required_aa: AA_NORMAL_TEXT,
            suggestion: format!(
                "Consider adjusting {label} color to {suggested} for better contrast."
            ),
            compliant_aa_normal: compliance.aa_normal_text,
        });
    }

    suggestions
}
