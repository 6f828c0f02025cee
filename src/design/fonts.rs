//! Font pairing selection and golden-ratio type scales
//!
//! Pairings are scored against the aggregated moods, typography styles and
//! brand principles. The type scale and micro-typography are derived from
//! the same features whether or not the brand dictates the fonts.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::aggregate::AggregatedFeatures;
use crate::analysis::tags::Descriptor as D;
use crate::analysis::tags::{Descriptor, DescriptorSet};
use crate::design::guidelines::BrandGuidelines;
use crate::io::configuration::{
    ASYMMETRIC_SYMMETRY, BASE_FONT_SIZE, BUSY_ENTROPY, BUSY_FONT_SIZE_FACTOR,
    BUSY_SCALE_RATIO_FACTOR, CENTRED_BALANCE, DEFAULT_BODY_FONT, DEFAULT_HEADING_FONT,
    FONT_SIZE_PER_AESTHETIC_POINT, FONT_SIZE_PER_WHITESPACE, GOLDEN_RATIO, GOOD_AESTHETIC_SCORE,
    HIGH_AESTHETIC_SCORE, LOW_AESTHETIC_SCORE, ORDERLY_SYMMETRY, READABLE_BODY_FONT, ROOMY_WHITESPACE,
    SCALE_RATIO_AESTHETIC_NUDGE, SCALE_RATIO_PER_WHITESPACE, SIMPLE_FONT_SIZE_FACTOR,
    SIMPLE_FRACTAL_DIMENSION, SIMPLE_SCALE_RATIO_FACTOR, TIGHT_WHITESPACE,
};

/// A curated heading/body font combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontPairing {
    /// Heading font family
    pub heading: &'static str,
    /// Body font family
    pub body: &'static str,
    /// Moods the pairing suits
    pub moods: &'static [Descriptor],
    /// Typography styles the pairing embodies
    pub styles: &'static [Descriptor],
    /// Visual busyness of the fonts in `[0, 1]`
    pub complexity: f64,
    /// Body text readability in `[0, 1]`
    pub readability: f64,
}

const fn pairing(
    heading: &'static str,
    body: &'static str,
    moods: &'static [Descriptor],
    styles: &'static [Descriptor],
    complexity: f64,
    readability: f64,
) -> FontPairing {
    FontPairing {
        heading,
        body,
        moods,
        styles,
        complexity,
        readability,
    }
}

/// Catalogue of pairings, in tie-break order
pub const FONT_PAIRINGS: [FontPairing; 20] = [
    pairing(
        "Roboto",
        "Open Sans",
        &[D::Modern, D::Professional, D::Calm, D::Balanced, D::Clean, D::Structured, D::Subtle],
        &[D::SansSerif, D::Light, D::Geometric, D::Clean],
        0.2,
        0.9,
    ),
    pairing(
        "Playfair Display",
        "Lora",
        &[D::Elegant, D::Calm, D::Professional, D::Balanced, D::Subtle, D::Structured],
        &[D::Serif, D::Light, D::Classic],
        0.4,
        0.8,
    ),
    pairing(
        "Montserrat",
        "Lato",
        &[D::Vibrant, D::Modern, D::Playful, D::Energetic, D::Dynamic, D::Bold, D::Complex],
        &[D::SansSerif, D::Bold, D::Geometric, D::Display],
        0.6,
        0.7,
    ),
    pairing(
        "Oswald",
        "Merriweather",
        &[D::Bold, D::Professional, D::Modern, D::Dense, D::Structured, D::Complex],
        &[D::SansSerif, D::Serif, D::Bold],
        0.7,
        0.75,
    ),
    pairing(
        "Pacifico",
        "Quicksand",
        &[D::Playful, D::Creative, D::Vibrant, D::Dynamic, D::Organic, D::Expressive],
        &[D::Script, D::SansSerif, D::Expressive],
        0.8,
        0.6,
    ),
    pairing(
        "Space Mono",
        "IBM Plex Sans",
        &[D::Techy, D::Modern, D::Professional, D::Dense, D::Structured, D::Complex],
        &[D::Monospace, D::SansSerif, D::Geometric],
        0.7,
        0.8,
    ),
    pairing(
        "Merriweather",
        "Open Sans",
        &[D::Classic, D::Professional, D::Calm, D::Balanced, D::Subtle, D::Clean],
        &[D::Serif, D::SansSerif, D::Light],
        0.3,
        0.9,
    ),
    pairing(
        "Lato",
        "Roboto",
        &[D::Modern, D::Professional, D::Vibrant, D::Balanced, D::Clean, D::Structured],
        &[D::SansSerif, D::Light],
        0.25,
        0.85,
    ),
    pairing(
        "Rubik",
        "Noto Sans",
        &[D::Modern, D::Clean, D::Minimalist, D::Balanced, D::Structured, D::Subtle],
        &[D::SansSerif, D::Geometric],
        0.3,
        0.88,
    ),
    pairing(
        "Source Code Pro",
        "Inter",
        &[D::Techy, D::Modern, D::Professional, D::Dense, D::Structured, D::Complex],
        &[D::Monospace, D::SansSerif],
        0.65,
        0.82,
    ),
    pairing(
        "Dancing Script",
        "Josefin Sans",
        &[D::Elegant, D::Creative, D::Playful, D::Organic, D::Expressive],
        &[D::Script, D::SansSerif, D::Expressive],
        0.9,
        0.55,
    ),
    pairing(
        "Bitter",
        "PT Sans",
        &[D::Classic, D::Professional, D::Balanced, D::Structured],
        &[D::Serif, D::SansSerif],
        0.45,
        0.8,
    ),
    pairing(
        "Nunito Sans",
        "Fira Sans",
        &[D::Modern, D::Clean, D::Light, D::Minimalist, D::Subtle, D::Structured],
        &[D::SansSerif, D::Light],
        0.2,
        0.92,
    ),
    pairing(
        "Anton",
        "Open Sans",
        &[D::Bold, D::Energetic, D::Vibrant, D::Dynamic, D::Complex],
        &[D::SansSerif, D::Bold, D::Display],
        0.85,
        0.65,
    ),
    pairing(
        "Comfortaa",
        "Muli",
        &[D::Playful, D::Modern, D::Clean, D::Organic, D::Subtle],
        &[D::SansSerif, D::Geometric, D::Light],
        0.35,
        0.8,
    ),
    pairing(
        "Fjalla One",
        "Roboto Condensed",
        &[D::Bold, D::Dense, D::Energetic, D::Structured, D::Complex],
        &[D::SansSerif, D::Bold],
        0.75,
        0.7,
    ),
    pairing(
        "Poppins",
        "Raleway",
        &[D::Modern, D::Clean, D::Minimalist, D::Balanced, D::Structured],
        &[D::SansSerif, D::Geometric, D::Light],
        0.3,
        0.9,
    ),
    pairing(
        "Lora",
        "Noto Serif",
        &[D::Elegant, D::Classic, D::Calm, D::Balanced, D::Subtle],
        &[D::Serif, D::Classic],
        0.4,
        0.85,
    ),
    pairing(
        "Bebas Neue",
        "Montserrat",
        &[D::Bold, D::Modern, D::Energetic, D::Dense, D::Complex],
        &[D::SansSerif, D::Display, D::Bold],
        0.8,
        0.68,
    ),
    pairing(
        "Permanent Marker",
        "Indie Flower",
        &[D::Creative, D::Playful, D::Expressive, D::Organic],
        &[D::Script, D::Display, D::Expressive],
        0.95,
        0.5,
    ),
];

const MOOD_WEIGHT: f64 = 2.0;
const STYLE_WEIGHT: f64 = 1.5;
const BRAND_FONT_BONUS: f64 = 3.0;
const SCORE_TIE_EPSILON: f64 = 1e-9;

/// Font sizes in pixels from caption up to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizeScale {
    /// Base over ratio^1.5
    pub caption: u32,
    /// Base over ratio
    pub small: u32,
    /// Base size
    pub body: u32,
    /// Base times ratio
    pub h6: u32,
    /// Base times ratio^2
    pub h5: u32,
    /// Base times ratio^3
    pub h4: u32,
    /// Base times ratio^4
    pub h3: u32,
    /// Base times ratio^5
    pub h2: u32,
    /// Base times ratio^6
    pub h1: u32,
    /// Base times ratio^7
    pub display: u32,
}

/// Line height recommendation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeight {
    /// Generous leading
    Relaxed,
    /// Compact leading
    Tight,
    /// Browser default leading
    #[default]
    Normal,
}

/// Letter spacing recommendation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSpacing {
    /// Open tracking
    Wide,
    /// Closed tracking
    Tight,
    /// Browser default tracking
    #[default]
    Normal,
}

/// Micro-typography recommendations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypographicRecommendations {
    /// Leading
    pub line_height: LineHeight,
    /// Tracking
    pub letter_spacing: LetterSpacing,
}

/// Complete typography decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyResult {
    /// Heading font family
    pub heading_font: String,
    /// Body font family
    pub body_font: String,
    /// Pixel sizes for each text role
    pub font_size_scale: FontSizeScale,
    /// Leading and tracking
    pub typographic_recommendations: TypographicRecommendations,
}

/// Body font size before rounding
///
/// Grows with whitespace and aesthetic score; simple images get 5% more and
/// busy images 5% less.
pub fn base_font_size(features: &AggregatedFeatures) -> f64 {
    let base = features.aesthetic_score.mul_add(
        FONT_SIZE_PER_AESTHETIC_POINT,
        features
            .whitespace
            .mul_add(FONT_SIZE_PER_WHITESPACE, BASE_FONT_SIZE),
    );

    if features.is_simple() {
        base * SIMPLE_FONT_SIZE_FACTOR
    } else if features.is_busy() {
        base * BUSY_FONT_SIZE_FACTOR
    } else {
        base
    }
}

/// Golden ratio nudged by aesthetic score, whitespace and visual density
pub fn adjusted_scale_ratio(features: &AggregatedFeatures) -> f64 {
    let mut ratio = GOLDEN_RATIO;
    if features.aesthetic_score >= HIGH_AESTHETIC_SCORE {
        ratio += SCALE_RATIO_AESTHETIC_NUDGE;
    } else if features.aesthetic_score <= LOW_AESTHETIC_SCORE {
        ratio -= SCALE_RATIO_AESTHETIC_NUDGE;
    }

    ratio += features.whitespace * SCALE_RATIO_PER_WHITESPACE;

    if features.is_busy() {
        ratio * BUSY_SCALE_RATIO_FACTOR
    } else if features.is_simple() {
        ratio * SIMPLE_SCALE_RATIO_FACTOR
    } else {
        ratio
    }
}

fn scale_step(base: f64, ratio: f64, exponent: f64) -> u32 {
    (base * ratio.powf(exponent)).round_ties_even().max(1.0) as u32
}

/// Modular type scale from a base size
///
/// Sizes are rounded half to even and never drop below one pixel.
pub fn font_size_scale(base: f64, features: &AggregatedFeatures) -> FontSizeScale {
    let ratio = adjusted_scale_ratio(features);
    let step = |exponent: f64| scale_step(base, ratio, exponent);

    FontSizeScale {
        caption: step(-1.5),
        small: step(-1.0),
        body: step(0.0),
        h6: step(1.0),
        h5: step(2.0),
        h4: step(3.0),
        h3: step(4.0),
        h2: step(5.0),
        h1: step(6.0),
        display: step(7.0),
    }
}

/// Leading and tracking for the chosen fonts
pub fn typographic_recommendations(
    heading_font: &str,
    features: &AggregatedFeatures,
    guidelines: &BrandGuidelines,
) -> TypographicRecommendations {
    let principle = |p: Descriptor| guidelines.has_principle(p);

    let line_height = if features.whitespace > ROOMY_WHITESPACE
        || features.aesthetic_score >= HIGH_AESTHETIC_SCORE
        || principle(D::Minimalist)
        || principle(D::Clean)
    {
        LineHeight::Relaxed
    } else if features.whitespace < TIGHT_WHITESPACE
        || features.is_busy()
        || principle(D::Dense)
        || principle(D::Complex)
    {
        LineHeight::Tight
    } else {
        LineHeight::Normal
    };

    let letter_spacing = if heading_font.to_lowercase().contains("display")
        || principle(D::Bold)
        || principle(D::Expressive)
        || principle(D::Vibrant)
    {
        LetterSpacing::Wide
    } else if principle(D::Light)
        || principle(D::Geometric)
        || principle(D::Minimalist)
        || principle(D::Clean)
    {
        LetterSpacing::Tight
    } else {
        LetterSpacing::Normal
    };

    TypographicRecommendations {
        line_height,
        letter_spacing,
    }
}

/// Tags and metrics a pairing is matched against
#[derive(Debug, Clone)]
pub struct PairingContext<'a> {
    /// Image moods plus brand principles
    pub moods: DescriptorSet,
    /// Image typography styles plus brand principles
    pub styles: DescriptorSet,
    /// Aggregated image features
    pub features: &'a AggregatedFeatures,
    /// Brand heading font, if only partly dictated
    pub heading_font: Option<&'a str>,
    /// Brand body font, if only partly dictated
    pub body_font: Option<&'a str>,
}

impl<'a> PairingContext<'a> {
    /// Merge image tags with the brand principles
    pub fn new(features: &'a AggregatedFeatures, guidelines: &'a BrandGuidelines) -> Self {
        let principles: DescriptorSet = guidelines.principle_descriptors().collect();
        Self {
            moods: features.moods.union(&principles).copied().collect(),
            styles: features.typography.union(&principles).copied().collect(),
            features,
            heading_font: guidelines.heading_font.as_deref(),
            body_font: guidelines.body_font.as_deref(),
        }
    }

    fn matches_brand_font(&self, pairing: &FontPairing) -> bool {
        self.heading_font == Some(pairing.heading) || self.body_font == Some(pairing.body)
    }
}

fn overlap(tags: &DescriptorSet, candidates: &[Descriptor]) -> f64 {
    candidates.iter().filter(|c| tags.contains(c)).count() as f64
}

/// Weighted match score of one pairing
pub fn score_pairing(pairing: &FontPairing, context: &PairingContext<'_>) -> f64 {
    let features = context.features;
    let pairing_has_style = |s: Descriptor| pairing.styles.contains(&s);
    let pairing_has_mood = |m: Descriptor| pairing.moods.contains(&m);
    let wants_style = |s: Descriptor| context.styles.contains(&s);

    let mut score = overlap(&context.moods, pairing.moods).mul_add(
        MOOD_WEIGHT,
        overlap(&context.styles, pairing.styles) * STYLE_WEIGHT,
    );

    if wants_style(D::Clean)
        && pairing_has_style(D::Geometric)
        && features.fractal_dimension < SIMPLE_FRACTAL_DIMENSION
    {
        score += 2.0;
    }
    if wants_style(D::Complex) && pairing_has_style(D::Expressive) && features.entropy > BUSY_ENTROPY
    {
        score += 2.0;
    }
    if wants_style(D::Structured)
        && features.symmetry_horizontal > ORDERLY_SYMMETRY
        && features.symmetry_vertical > ORDERLY_SYMMETRY
        && features.visual_balance > CENTRED_BALANCE
    {
        score += 1.5;
    }
    if wants_style(D::Organic)
        && (features.symmetry_horizontal < ASYMMETRIC_SYMMETRY
            || features.symmetry_vertical < ASYMMETRIC_SYMMETRY)
        && context.moods.contains(&D::Dynamic)
    {
        score += 1.5;
    }
    if features.aesthetic_score >= GOOD_AESTHETIC_SCORE
        && (pairing_has_mood(D::Professional) || pairing_has_mood(D::Balanced))
    {
        score += 1.0;
    }
    if features.whitespace < TIGHT_WHITESPACE && pairing.readability > READABLE_BODY_FONT {
        score += 1.0;
    }

    score = pairing
        .complexity
        .mul_add(-2.0, features.fractal_dimension)
        .abs()
        .mul_add(-0.5, score);
    score = (1.0 - pairing.complexity.mul_add(-8.0, features.entropy).abs()).mul_add(0.2, score);

    if context.heading_font == Some(pairing.heading) {
        score += BRAND_FONT_BONUS;
    }
    if context.body_font == Some(pairing.body) {
        score += BRAND_FONT_BONUS;
    }

    score
}

/// Highest scoring pairing from the catalogue
///
/// Ties go to a pairing sharing a brand font, then to better body
/// readability when whitespace is scarce, then to catalogue order.
pub fn best_pairing(context: &PairingContext<'_>) -> Option<&'static FontPairing> {
    let mut best: Option<(&'static FontPairing, f64)> = None;

    for candidate in &FONT_PAIRINGS {
        let score = score_pairing(candidate, context);
        let replace = match best {
            None => true,
            Some((_, best_score)) if score > best_score + SCORE_TIE_EPSILON => true,
            Some((current, best_score)) if (score - best_score).abs() <= SCORE_TIE_EPSILON => {
                context.matches_brand_font(candidate)
                    || (context.features.whitespace < TIGHT_WHITESPACE
                        && candidate.readability > current.readability)
            }
            Some(_) => false,
        };

        if replace {
            best = Some((candidate, score));
        }
    }

    best.map(|(pairing, score)| {
        debug!(
            heading = pairing.heading,
            body = pairing.body,
            score,
            "Best font pairing"
        );
        pairing
    })
}

/// Choose fonts, type scale and micro-typography
///
/// Fonts given for both roles by the brand are used verbatim. A single brand
/// font is kept and biases the choice of its partner.
pub fn suggest_fonts(features: &AggregatedFeatures, guidelines: &BrandGuidelines) -> TypographyResult {
    let font_size_scale = font_size_scale(base_font_size(features), features);

    let (heading_font, body_font) = match (&guidelines.heading_font, &guidelines.body_font) {
        (Some(heading), Some(body)) => {
            info!("Brand guidelines fully dictate font choices");
            (heading.clone(), body.clone())
        }
        (heading, body) => {
            let context = PairingContext::new(features, guidelines);
            let (suggested_heading, suggested_body) = best_pairing(&context)
                .map_or((DEFAULT_HEADING_FONT, DEFAULT_BODY_FONT), |p| (p.heading, p.body));
            (
                heading.clone().unwrap_or_else(|| suggested_heading.to_string()),
                body.clone().unwrap_or_else(|| suggested_body.to_string()),
            )
        }
    };

    info!(heading = %heading_font, body = %body_font, "Selected font pairing");

    TypographyResult {
        typographic_recommendations: typographic_recommendations(&heading_font, features, guidelines),
        heading_font,
        body_font,
        font_size_scale,
    }
}
