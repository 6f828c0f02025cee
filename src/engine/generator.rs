//! Single-shot theme generation
//!
//! Images are analysed one at a time, then aggregated into one feature record
//! that drives the palette, typography, layout and component decisions. Bad
//! inputs never abort a run; they become warnings on the decision record.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::aesthetic::{AestheticScorer, SimulatedScorer};
use crate::analysis::aggregate::{AggregatedFeatures, aggregate_features};
use crate::analysis::analyzer::{ImageMetrics, analyze_image};
use crate::color::palette::{PaletteExtractor, PaletteResult, PaletteStyle, ThemeMode};
use crate::color::space::Rgb;
use crate::design::components::{ComponentSuggestion, suggest_components};
use crate::design::fonts::{TypographyResult, suggest_fonts};
use crate::design::guidelines::{BrandGuidelines, resolve_brand_guidelines};
use crate::design::layout::{LayoutDecision, LayoutStyle, decide_layout};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::image::SourceImage;

/// Run-time choices for one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Light or dark bias
    pub mode: ThemeMode,
    /// Colour treatment
    pub palette_style: PaletteStyle,
    /// Layout used when the brand states no preference
    pub layout_style: LayoutStyle,
    /// Clustering seed
    pub seed: u64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            palette_style: PaletteStyle::default(),
            layout_style: LayoutStyle::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Result of analysing one input
#[derive(Debug, Clone)]
pub struct AnalyzedImage {
    /// Metrics, possibly unavailable
    pub metrics: ImageMetrics,
    /// Pixels contributed to the palette pool
    pub palette_sample: Vec<Rgb>,
    /// Why the input could not be used, if it could not
    pub warning: Option<String>,
}

impl AnalyzedImage {
    /// Whether the input was decoded and measured
    pub const fn is_usable(&self) -> bool {
        self.warning.is_none()
    }
}

/// Every decision made for one batch of images
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDecision {
    /// Per-image measurements in input order
    pub images: Vec<ImageMetrics>,
    /// Batch averages and tag unions
    pub features: AggregatedFeatures,
    /// Guidelines the design rules used
    pub brand_guidelines: BrandGuidelines,
    /// True when the guidelines were synthesized
    pub guidelines_inferred: bool,
    /// Colours, accessibility fixes and harmony
    pub palette: PaletteResult,
    /// Fonts, scale and micro-typography
    pub typography: TypographyResult,
    /// Layout variant, spacing and classes
    pub layout: LayoutDecision,
    /// Suggested interactive components
    pub components: Vec<ComponentSuggestion>,
    /// Non-fatal problems met along the way
    pub warnings: Vec<String>,
}

/// Turns images and optional brand guidelines into a [`ThemeDecision`]
#[derive(Debug, Clone)]
pub struct ThemeGenerator<S = SimulatedScorer> {
    options: GenerationOptions,
    scorer: S,
}

impl ThemeGenerator {
    /// Generator with the offline aesthetic scorer
    pub const fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            scorer: SimulatedScorer,
        }
    }
}

impl<S: AestheticScorer> ThemeGenerator<S> {
    /// Generator with a custom aesthetic scorer
    pub const fn with_scorer(options: GenerationOptions, scorer: S) -> Self {
        Self { options, scorer }
    }

    /// Options in use
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Measure a decoded image
    pub fn analyze(&self, image: &SourceImage) -> AnalyzedImage {
        AnalyzedImage {
            metrics: analyze_image(image, &self.scorer),
            palette_sample: image.palette_sample(),
            warning: None,
        }
    }

    /// Decode and measure an image file
    ///
    /// A file that cannot be decoded yields unavailable metrics and a warning.
    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> AnalyzedImage {
        let path = path.as_ref();
        match SourceImage::open(path) {
            Ok(image) => self.analyze(&image),
            Err(error) => {
                let message = format!("Skipping {}: {error}", path.display());
                warn!("{message}");
                AnalyzedImage {
                    metrics: ImageMetrics::unavailable(
                        path.display().to_string(),
                        &error.to_string(),
                    ),
                    palette_sample: Vec::new(),
                    warning: Some(message),
                }
            }
        }
    }

    /// Aggregate analysed images and make every design decision
    pub fn decide(&self, analyzed: Vec<AnalyzedImage>, guidelines: BrandGuidelines) -> ThemeDecision {
        let mut warnings = Vec::new();
        let mut images = Vec::with_capacity(analyzed.len());
        let mut samples = Vec::with_capacity(analyzed.len());

        for entry in analyzed {
            warnings.extend(entry.warning);
            images.push(entry.metrics);
            samples.push(entry.palette_sample);
        }

        if images.is_empty() {
            warnings.push("No images supplied; using default features.".to_string());
        } else if images.iter().all(|m| m.whitespace_percentage.is_none()) {
            warnings.push("No image could be analysed; using default features.".to_string());
        }

        let features = aggregate_features(&images);
        let resolved = resolve_brand_guidelines(guidelines, &features);
        let guidelines = resolved.guidelines;

        let extractor = PaletteExtractor {
            style: self.options.palette_style,
            mode: self.options.mode,
            seed: self.options.seed,
        };
        let palette = extractor.extract(&samples);
        let typography = suggest_fonts(&features, &guidelines);
        let layout = decide_layout(&features, &guidelines, self.options.layout_style);
        let components = suggest_components(layout.resolved_layout_style, &features, &guidelines);

        for warning in &warnings {
            warn!("{warning}");
        }
        info!(
            images = images.len(),
            primary = %palette.palette.primary,
            heading = %typography.heading_font,
            layout = layout.resolved_layout_style.as_str(),
            components = components.len(),
            "Theme decision complete"
        );

        ThemeDecision {
            images,
            features,
            brand_guidelines: guidelines,
            guidelines_inferred: resolved.inferred,
            palette,
            typography,
            layout,
            components,
            warnings,
        }
    }

    /// Generate a decision from decoded images
    pub fn generate(&self, images: &[SourceImage], guidelines: BrandGuidelines) -> ThemeDecision {
        let analyzed = images.iter().map(|image| self.analyze(image)).collect();
        self.decide(analyzed, guidelines)
    }

    /// Generate a decision from image files, skipping any that fail to decode
    pub fn generate_from_paths<P: AsRef<Path>>(
        &self,
        paths: &[P],
        guidelines: BrandGuidelines,
    ) -> ThemeDecision {
        let analyzed = paths.iter().map(|path| self.analyze_path(path)).collect();
        self.decide(analyzed, guidelines)
    }
}
