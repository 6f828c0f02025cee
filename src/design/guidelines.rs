//! Brand guidelines: parsing, inference and resolution
//!
//! A guideline document is a JSON object with camelCase keys. Each key is
//! validated on its own; a bad value drops only that key. When no guideline
//! is supplied at all, an equivalent record is inferred from the aggregated
//! image features. A partial guideline is used exactly as given.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::analysis::aggregate::AggregatedFeatures;
use crate::analysis::tags::Descriptor;
use crate::color::space::Rgb;
use crate::io::configuration::{
    AIRY_WHITESPACE, BUSY_ENTROPY, CHAOTIC_ENTROPY, COMPLEX_FRACTAL_DIMENSION, CROWDED_WHITESPACE,
    HIGH_AESTHETIC_SCORE, PACKED_WHITESPACE, SIMPLE_FRACTAL_DIMENSION, SPACIOUS_WHITESPACE,
    STRUCTURED_BALANCE, STRUCTURED_SYMMETRY, TEXTURED_ENTROPY,
};
use crate::io::error::{Result, ThemeError};

/// Overall layout direction requested by a brand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreference {
    /// Sparse, whitespace-led layouts
    Minimalist,
    /// Dense, high-impact layouts
    Bold,
    /// Balanced, conventional layouts
    #[default]
    Classic,
    /// Asymmetric, dynamic layouts
    Modern,
}

impl LayoutPreference {
    /// Every preference, in declaration order
    pub const ALL: [Self; 4] = [Self::Minimalist, Self::Bold, Self::Classic, Self::Modern];

    /// Lowercase token used in guideline files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Bold => "bold",
            Self::Classic => "classic",
            Self::Modern => "modern",
        }
    }

    /// Parse an exact lowercase token
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == token)
    }
}

impl fmt::Display for LayoutPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brand constraints, either supplied by the user or inferred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandGuidelines {
    /// Brand primary colour as uppercase `#RRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Brand secondary colour as uppercase `#RRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Brand accent colour as uppercase `#RRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    /// Heading font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    /// Body font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    /// Requested layout direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_preference: Option<LayoutPreference>,
    /// Lowercase free-form principle tokens
    pub design_principles: BTreeSet<String>,
}

/// A parsed guideline document with the problems found while validating it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGuidelines {
    /// The keys that passed validation
    pub guidelines: BrandGuidelines,
    /// One message per dropped or ignored key
    pub diagnostics: Vec<String>,
}

const COLOR_KEYS: [&str; 3] = ["primaryColor", "secondaryColor", "accentColor"];
const FONT_KEYS: [&str; 2] = ["headingFont", "bodyFont"];
const LAYOUT_KEY: &str = "layoutPreference";
const PRINCIPLES_KEY: &str = "designPrinciples";

impl BrandGuidelines {
    /// True when no key is set
    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.secondary_color.is_none()
            && self.accent_color.is_none()
            && self.heading_font.is_none()
            && self.body_font.is_none()
            && self.layout_preference.is_none()
            && self.design_principles.is_empty()
    }

    /// Whether a principle token is present
    pub fn has_principle(&self, principle: Descriptor) -> bool {
        self.design_principles.contains(principle.as_str())
    }

    /// Principles that belong to the shared descriptor vocabulary
    pub fn principle_descriptors(&self) -> impl Iterator<Item = Descriptor> + '_ {
        self.design_principles
            .iter()
            .filter_map(|p| Descriptor::parse(p))
    }

    /// Parse a JSON guideline document
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid JSON. Invalid keys are not
    /// errors; they are reported in [`ParsedGuidelines::diagnostics`].
    pub fn from_json_str(text: &str) -> std::result::Result<ParsedGuidelines, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json_value(&value))
    }

    /// Validate an already parsed JSON value key by key
    pub fn from_json_value(value: &Value) -> ParsedGuidelines {
        let mut parsed = ParsedGuidelines::default();
        let Some(object) = value.as_object() else {
            parsed
                .diagnostics
                .push("Brand guidelines must be a JSON object. Ignoring document.".to_string());
            return parsed;
        };

        parse_colors(object, &mut parsed);
        parse_fonts(object, &mut parsed);
        parse_layout(object, &mut parsed);
        parse_principles(object, &mut parsed);

        for key in object.keys() {
            let known = COLOR_KEYS.contains(&key.as_str())
                || FONT_KEYS.contains(&key.as_str())
                || key == LAYOUT_KEY
                || key == PRINCIPLES_KEY;
            if !known {
                parsed
                    .diagnostics
                    .push(format!("Unknown key '{key}' in brand guidelines. Ignoring."));
            }
        }

        parsed
    }
}

fn parse_colors(object: &Map<String, Value>, parsed: &mut ParsedGuidelines) {
    for key in COLOR_KEYS {
        let Some(raw) = object.get(key) else {
            continue;
        };

        let color = raw
            .as_str()
            .filter(|hex| matches!(hex.len(), 4 | 7))
            .and_then(Rgb::from_hex)
            .map(Rgb::to_hex);

        let Some(color) = color else {
            parsed.diagnostics.push(format!(
                "Invalid format for '{key}' in brand guidelines. Expected hex string (e.g., #RRGGBB). Skipping."
            ));
            continue;
        };

        let slot = match key {
            "primaryColor" => &mut parsed.guidelines.primary_color,
            "secondaryColor" => &mut parsed.guidelines.secondary_color,
            _ => &mut parsed.guidelines.accent_color,
        };
        *slot = Some(color);
    }
}

fn parse_fonts(object: &Map<String, Value>, parsed: &mut ParsedGuidelines) {
    for key in FONT_KEYS {
        let Some(raw) = object.get(key) else {
            continue;
        };

        let Some(font) = raw.as_str().filter(|f| !f.is_empty()) else {
            parsed.diagnostics.push(format!(
                "Invalid format for '{key}' in brand guidelines. Expected non-empty string. Skipping."
            ));
            continue;
        };

        let slot = if key == "headingFont" {
            &mut parsed.guidelines.heading_font
        } else {
            &mut parsed.guidelines.body_font
        };
        *slot = Some(font.to_string());
    }
}

fn parse_layout(object: &Map<String, Value>, parsed: &mut ParsedGuidelines) {
    let Some(raw) = object.get(LAYOUT_KEY) else {
        return;
    };

    match raw.as_str().and_then(LayoutPreference::parse) {
        Some(preference) => parsed.guidelines.layout_preference = Some(preference),
        None => parsed.diagnostics.push(format!(
            "Invalid value for '{LAYOUT_KEY}' in brand guidelines. Skipping."
        )),
    }
}

fn parse_principles(object: &Map<String, Value>, parsed: &mut ParsedGuidelines) {
    let Some(raw) = object.get(PRINCIPLES_KEY) else {
        return;
    };

    let Some(entries) = raw.as_array() else {
        parsed.diagnostics.push(format!(
            "Invalid format for '{PRINCIPLES_KEY}' in brand guidelines. Expected a list of strings. Skipping."
        ));
        return;
    };

    for entry in entries {
        match entry.as_str().map(|p| p.trim().to_lowercase()) {
            Some(principle) if !principle.is_empty() => {
                parsed.guidelines.design_principles.insert(principle);
            }
            _ => parsed.diagnostics.push(format!(
                "Invalid entry {entry} in '{PRINCIPLES_KEY}'. Expected non-empty string. Skipping."
            )),
        }
    }
}

/// Read and validate a guideline file
///
/// Every diagnostic is also logged as a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain valid JSON
pub fn load_brand_guidelines<P: AsRef<Path>>(path: P) -> Result<ParsedGuidelines> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ThemeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read brand guidelines",
        source: e,
    })?;

    let parsed = BrandGuidelines::from_json_str(&text).map_err(|e| ThemeError::GuidelineParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    for diagnostic in &parsed.diagnostics {
        warn!(path = %path.display(), "{diagnostic}");
    }
    info!(path = %path.display(), "Brand guidelines loaded");

    Ok(parsed)
}

/// Synthesize guidelines from the aggregated image features
///
/// Principle rules are independent; several may apply at once.
pub fn infer_brand_guidelines(features: &AggregatedFeatures) -> BrandGuidelines {
    let creative = features.has_mood(Descriptor::Creative) || features.has_mood(Descriptor::Dynamic);

    let layout_preference =
        if features.has_mood(Descriptor::Minimalist) || features.whitespace > SPACIOUS_WHITESPACE {
            LayoutPreference::Minimalist
        } else if features.has_mood(Descriptor::Dense) || features.whitespace < PACKED_WHITESPACE {
            LayoutPreference::Bold
        } else if creative || features.entropy > BUSY_ENTROPY {
            LayoutPreference::Modern
        } else {
            LayoutPreference::Classic
        };

    let rules = [
        (
            Descriptor::Structured,
            features.symmetry_horizontal > STRUCTURED_SYMMETRY
                && features.symmetry_vertical > STRUCTURED_SYMMETRY
                && features.visual_balance > STRUCTURED_BALANCE,
        ),
        (Descriptor::Organic, creative || features.entropy > TEXTURED_ENTROPY),
        (
            Descriptor::Bold,
            features.has_typography(Descriptor::Bold) || features.whitespace < CROWDED_WHITESPACE,
        ),
        (
            Descriptor::Subtle,
            features.has_typography(Descriptor::Light) || features.whitespace > AIRY_WHITESPACE,
        ),
        (
            Descriptor::Clean,
            features.aesthetic_score >= HIGH_AESTHETIC_SCORE
                && features.fractal_dimension < SIMPLE_FRACTAL_DIMENSION,
        ),
        (
            Descriptor::Complex,
            features.fractal_dimension > COMPLEX_FRACTAL_DIMENSION
                || features.entropy > CHAOTIC_ENTROPY,
        ),
    ];

    let design_principles = rules
        .into_iter()
        .filter(|&(_, applies)| applies)
        .map(|(principle, _)| principle.as_str().to_string())
        .collect();

    BrandGuidelines {
        layout_preference: Some(layout_preference),
        design_principles,
        ..BrandGuidelines::default()
    }
}

/// Guidelines the design rules will use, and where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGuidelines {
    /// Active guidelines
    pub guidelines: BrandGuidelines,
    /// True when the guidelines were synthesized from image features
    pub inferred: bool,
}

/// Use supplied guidelines verbatim, or infer them when none were given
///
/// Inference never fills gaps in a partial guideline.
pub fn resolve_brand_guidelines(
    supplied: BrandGuidelines,
    features: &AggregatedFeatures,
) -> ResolvedGuidelines {
    if !supplied.is_empty() {
        debug!("Using supplied brand guidelines");
        return ResolvedGuidelines {
            guidelines: supplied,
            inferred: false,
        };
    }

    let guidelines = infer_brand_guidelines(features);
    info!(
        layout = ?guidelines.layout_preference,
        principles = ?guidelines.design_principles,
        "Inferred brand guidelines from image analysis"
    );

    ResolvedGuidelines {
        guidelines,
        inferred: true,
    }
}
