//! Descriptor vocabulary and heuristic typography / mood inference

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::color::space::Hls;
use crate::io::configuration::{
    TAG_AIRY_WHITESPACE_PERCENT, TAG_BALANCED_SYMMETRY, TAG_CROWDED_WHITESPACE_PERCENT,
    TAG_DISPLAY_SATURATION, TAG_DYNAMIC_SYMMETRY, TAG_EXPRESSIVE_SYMMETRY, TAG_GEOMETRIC_SYMMETRY,
    TAG_INTENSE_HUE_SATURATION, TAG_MUTED_SATURATION, TAG_SERIF_SATURATION,
    TAG_VIBRANT_SATURATION, TAG_WEIGHT_TIEBREAK_WHITESPACE_PERCENT,
};

/// Shared vocabulary for typography styles, moods and design principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Descriptor {
    Light,
    Bold,
    Geometric,
    Expressive,
    Display,
    Serif,
    SansSerif,
    Script,
    Monospace,
    Classic,
    Clean,
    Energetic,
    Warm,
    Vibrant,
    Calm,
    Muted,
    Minimalist,
    Dense,
    Balanced,
    Professional,
    Dynamic,
    Creative,
    Modern,
    Elegant,
    Playful,
    Techy,
    Structured,
    Subtle,
    Organic,
    Complex,
}

impl Descriptor {
    /// Every descriptor, in declaration order
    pub const ALL: [Self; 30] = [
        Self::Light,
        Self::Bold,
        Self::Geometric,
        Self::Expressive,
        Self::Display,
        Self::Serif,
        Self::SansSerif,
        Self::Script,
        Self::Monospace,
        Self::Classic,
        Self::Clean,
        Self::Energetic,
        Self::Warm,
        Self::Vibrant,
        Self::Calm,
        Self::Muted,
        Self::Minimalist,
        Self::Dense,
        Self::Balanced,
        Self::Professional,
        Self::Dynamic,
        Self::Creative,
        Self::Modern,
        Self::Elegant,
        Self::Playful,
        Self::Techy,
        Self::Structured,
        Self::Subtle,
        Self::Organic,
        Self::Complex,
    ];

    /// Lowercase kebab-case token
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Bold => "bold",
            Self::Geometric => "geometric",
            Self::Expressive => "expressive",
            Self::Display => "display",
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Script => "script",
            Self::Monospace => "monospace",
            Self::Classic => "classic",
            Self::Clean => "clean",
            Self::Energetic => "energetic",
            Self::Warm => "warm",
            Self::Vibrant => "vibrant",
            Self::Calm => "calm",
            Self::Muted => "muted",
            Self::Minimalist => "minimalist",
            Self::Dense => "dense",
            Self::Balanced => "balanced",
            Self::Professional => "professional",
            Self::Dynamic => "dynamic",
            Self::Creative => "creative",
            Self::Modern => "modern",
            Self::Elegant => "elegant",
            Self::Playful => "playful",
            Self::Techy => "techy",
            Self::Structured => "structured",
            Self::Subtle => "subtle",
            Self::Organic => "organic",
            Self::Complex => "complex",
        }
    }

    /// Parse a token, ignoring case and surrounding whitespace
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == token)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of descriptors
pub type DescriptorSet = BTreeSet<Descriptor>;

/// Inputs to the tag heuristics for a single image
#[derive(Debug, Clone, Copy)]
pub struct TagInputs {
    /// Whitespace percentage in `[0, 100]`
    pub whitespace_percentage: f64,
    /// Top/bottom mirror similarity
    pub symmetry_horizontal: f64,
    /// Left/right mirror similarity
    pub symmetry_vertical: f64,
    /// Mean colour of the image, per channel in `[0, 255]`
    pub average_rgb: [f64; 3],
}

impl TagInputs {
    /// HLS saturation of the mean colour
    pub fn average_saturation(&self) -> f64 {
        Hls::from_unit_rgb(self.average_rgb.map(|c| c / 255.0)).saturation
    }
}

/// Typography styles suggested by whitespace, symmetry and saturation
///
/// Falls back to sans-serif when no rule fires.
pub fn infer_typography(inputs: &TagInputs) -> DescriptorSet {
    let whitespace = inputs.whitespace_percentage;
    let saturation = inputs.average_saturation();
    let mut styles = DescriptorSet::new();

    if whitespace > TAG_AIRY_WHITESPACE_PERCENT {
        styles.insert(Descriptor::Light);
    }
    if whitespace < TAG_CROWDED_WHITESPACE_PERCENT {
        styles.insert(Descriptor::Bold);
    }

    if inputs.symmetry_horizontal > TAG_GEOMETRIC_SYMMETRY
        && inputs.symmetry_vertical > TAG_GEOMETRIC_SYMMETRY
    {
        styles.insert(Descriptor::Geometric);
    } else if inputs.symmetry_horizontal < TAG_EXPRESSIVE_SYMMETRY
        || inputs.symmetry_vertical < TAG_EXPRESSIVE_SYMMETRY
    {
        styles.insert(Descriptor::Expressive);
    }

    if saturation > TAG_DISPLAY_SATURATION {
        styles.insert(Descriptor::Display);
    } else if saturation < TAG_SERIF_SATURATION {
        styles.insert(Descriptor::Serif);
    }

    if styles.contains(&Descriptor::Bold) && styles.contains(&Descriptor::Light) {
        if whitespace < TAG_WEIGHT_TIEBREAK_WHITESPACE_PERCENT {
            styles.remove(&Descriptor::Light);
        } else {
            styles.remove(&Descriptor::Bold);
        }
    }

    if styles.is_empty() {
        styles.insert(Descriptor::SansSerif);
    }
    styles
}

/// Mood descriptors suggested by colour, whitespace and symmetry
///
/// The result may be empty; there is no neutral placeholder.
pub fn infer_mood(inputs: &TagInputs) -> DescriptorSet {
    let [r, g, b] = inputs.average_rgb;
    let saturation = inputs.average_saturation();
    let whitespace = inputs.whitespace_percentage;
    let mut moods = DescriptorSet::new();

    if r > g && r > b {
        moods.insert(if saturation > TAG_INTENSE_HUE_SATURATION {
            Descriptor::Energetic
        } else {
            Descriptor::Warm
        });
    } else if b > r && b > g {
        moods.insert(if saturation > TAG_INTENSE_HUE_SATURATION {
            Descriptor::Vibrant
        } else {
            Descriptor::Calm
        });
    }

    if saturation > TAG_VIBRANT_SATURATION {
        moods.insert(Descriptor::Vibrant);
    } else if saturation < TAG_MUTED_SATURATION {
        moods.insert(Descriptor::Muted);
    }

    if whitespace > TAG_AIRY_WHITESPACE_PERCENT {
        moods.insert(Descriptor::Minimalist);
        moods.remove(&Descriptor::Vibrant);
    } else if whitespace < TAG_CROWDED_WHITESPACE_PERCENT {
        moods.insert(Descriptor::Dense);
    }

    let average_symmetry = (inputs.symmetry_horizontal + inputs.symmetry_vertical) / 2.0;
    if average_symmetry > TAG_BALANCED_SYMMETRY {
        moods.extend([Descriptor::Balanced, Descriptor::Professional]);
    } else if average_symmetry < TAG_DYNAMIC_SYMMETRY {
        moods.extend([Descriptor::Dynamic, Descriptor::Creative]);
    }

    moods
}
