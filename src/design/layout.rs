//! Layout style resolution, spacing scale and utility-class selection

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::aggregate::AggregatedFeatures;
use crate::analysis::tags::Descriptor;
use crate::design::guidelines::{BrandGuidelines, LayoutPreference};
use crate::io::configuration::{
    AIRY_WHITESPACE, ASYMMETRIC_SYMMETRY, BASE_SPACING_UNIT, BUSY_SPACING_FACTOR, CENTRED_BALANCE,
    CHAOTIC_ENTROPY, CROWDED_WHITESPACE, GOLDEN_RATIO, HIGH_AESTHETIC_SCORE, SIMPLE_FRACTAL_DIMENSION,
    SIMPLE_SPACING_FACTOR, SPACING_PER_BALANCE, SPACING_PER_WHITESPACE, SYMMETRIC_THRESHOLD,
    TEXTURED_ENTROPY, WIDE_GRID_ENTROPY,
};

/// Structural layout variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Few columns and generous spacing
    #[default]
    Minimal,
    /// Many columns and tight spacing
    Dense,
    /// Asymmetric spans and staggered cards
    Creative,
}

impl LayoutStyle {
    /// Lowercase token
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Dense => "dense",
            Self::Creative => "creative",
        }
    }
}

impl From<LayoutPreference> for LayoutStyle {
    fn from(preference: LayoutPreference) -> Self {
        match preference {
            LayoutPreference::Minimalist | LayoutPreference::Classic => Self::Minimal,
            LayoutPreference::Bold => Self::Dense,
            LayoutPreference::Modern => Self::Creative,
        }
    }
}

/// Golden-ratio spacing steps in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpacingScale {
    /// Base over ratio^2
    pub xs: u32,
    /// Base over ratio
    pub sm: u32,
    /// Base unit
    pub md: u32,
    /// Base times ratio
    pub lg: u32,
    /// Base times ratio^2
    pub xl: u32,
    /// Base times ratio^3
    #[serde(rename = "2xl")]
    pub xxl: u32,
}

impl SpacingScale {
    /// Scale around a base unit, rounded half to even
    pub fn from_base(base: f64) -> Self {
        let step = |exponent: i32| (base * GOLDEN_RATIO.powi(exponent)).round_ties_even() as u32;
        Self {
            xs: step(-2),
            sm: step(-1),
            md: step(0),
            lg: step(1),
            xl: step(2),
            xxl: step(3),
        }
    }
}

/// Base spacing unit before rounding
///
/// Grows with whitespace, balance and aesthetic score; busy images shrink it
/// by 10% and simple images grow it by 10%.
pub fn base_spacing_unit(features: &AggregatedFeatures) -> f64 {
    let unit = features.visual_balance.mul_add(
        SPACING_PER_BALANCE,
        features
            .whitespace
            .mul_add(SPACING_PER_WHITESPACE, BASE_SPACING_UNIT),
    ) + features.aesthetic_score;

    if features.is_busy() {
        unit * BUSY_SPACING_FACTOR
    } else if features.is_simple() {
        unit * SIMPLE_SPACING_FACTOR
    } else {
        unit
    }
}

/// Utility classes for the main page elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleClasses {
    /// Header shadow
    pub header_shadow: String,
    /// Button corner rounding
    pub button_rounded: String,
    /// Section padding
    pub section_padding: String,
    /// Card shadow
    pub card_shadow: String,
    /// Card corner rounding
    pub card_rounded: String,
    /// Transition timing, empty for none
    pub transition: String,
    /// Page background pattern, empty for none
    pub background_pattern: String,
    /// Card border
    pub border_style: String,
    /// Text leading
    pub text_leading: String,
    /// Text tracking
    pub text_tracking: String,
}

/// Grid classes for the main content area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridClasses {
    /// Responsive column counts
    pub columns: String,
    /// Gap between cells
    pub gap: String,
    /// Span of the main column, creative layouts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_span: Option<String>,
    /// Span of the side column, creative layouts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_span: Option<String>,
}

/// Complete layout decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutDecision {
    /// Layout variant after applying the brand preference
    pub resolved_layout_style: LayoutStyle,
    /// Spacing steps in pixels
    pub spacing_scale: SpacingScale,
    /// Element styling classes
    pub style_classes: StyleClasses,
    /// Content grid classes
    pub grid: GridClasses,
}

/// Brand preference wins over the requested style
pub fn resolve_layout_style(guidelines: &BrandGuidelines, requested: LayoutStyle) -> LayoutStyle {
    guidelines.layout_preference.map_or(requested, |preference| {
        let resolved = LayoutStyle::from(preference);
        info!(
            preference = %preference,
            layout = resolved.as_str(),
            "Applying brand layout preference"
        );
        resolved
    })
}

fn padding(spacing: u32) -> String {
    format!("p-{}", spacing / 4)
}

fn gap(spacing: u32) -> String {
    format!("gap-{}", spacing / 4)
}

/// Select utility classes
///
/// Mood rules run first and design principle rules second, so a principle
/// overrides any class a mood already set.
pub fn style_classes(
    features: &AggregatedFeatures,
    guidelines: &BrandGuidelines,
    spacing: &SpacingScale,
) -> StyleClasses {
    let mut classes = StyleClasses {
        header_shadow: "shadow-md".into(),
        button_rounded: "rounded-full".into(),
        section_padding: padding(spacing.lg),
        card_shadow: "shadow-md".into(),
        card_rounded: "rounded-lg".into(),
        transition: String::new(),
        background_pattern: String::new(),
        border_style: "border-solid".into(),
        text_leading: "leading-normal".into(),
        text_tracking: "tracking-normal".into(),
    };

    let mood = |m: Descriptor| features.has_mood(m);
    let principle = |p: Descriptor| guidelines.has_principle(p);

    if mood(Descriptor::Professional) || features.aesthetic_score >= HIGH_AESTHETIC_SCORE {
        classes.header_shadow = "shadow-xl".into();
        classes.card_shadow = "shadow-lg".into();
        classes.button_rounded = "rounded-md".into();
        classes.transition = "transition-all duration-500 ease-in-out".into();
        if features.fractal_dimension < SIMPLE_FRACTAL_DIMENSION {
            classes.background_pattern = "bg-white".into();
        }
        classes.border_style = "border-gray-200 border".into();
        classes.text_leading = "leading-relaxed".into();
        classes.text_tracking = "tracking-tight".into();
    }
    if mood(Descriptor::Playful) || mood(Descriptor::Creative) {
        classes.button_rounded = "rounded-full".into();
        classes.card_rounded = "rounded-3xl".into();
        classes.transition = "transition-all duration-300 ease-in-out".into();
        if features.entropy > TEXTURED_ENTROPY {
            classes.background_pattern = "bg-repeat bg-center bg-gray-50 bg-opacity-20".into();
        }
        classes.border_style = "border-dashed border-2 border-primary".into();
        classes.text_leading = "leading-loose".into();
        classes.text_tracking = "tracking-wide".into();
    }
    if mood(Descriptor::Minimalist) || features.whitespace > AIRY_WHITESPACE {
        classes.section_padding = padding(spacing.xl);
        classes.card_shadow = "shadow-sm".into();
        classes.card_rounded = "rounded-xl".into();
        classes.background_pattern = "bg-white".into();
        classes.border_style = "border-none".into();
        classes.text_leading = "leading-relaxed".into();
        classes.text_tracking = "tracking-tight".into();
    }
    if mood(Descriptor::Dense) || features.whitespace < CROWDED_WHITESPACE {
        classes.section_padding = padding(spacing.sm);
        classes.card_shadow = "shadow-none".into();
        if features.entropy > CHAOTIC_ENTROPY {
            classes.background_pattern = "bg-gray-200".into();
        }
        classes.border_style = "border-solid border-gray-400 border".into();
        classes.text_leading = "leading-tight".into();
        classes.text_tracking = "tracking-normal".into();
    }

    if principle(Descriptor::Structured) {
        classes.button_rounded = "rounded-md".into();
        classes.card_rounded = "rounded-lg".into();
        classes.header_shadow = "shadow-lg".into();
        classes.border_style = "border-solid border-gray-300 border-2".into();
        classes.text_leading = "leading-normal".into();
        classes.text_tracking = "tracking-tight".into();
    }
    if principle(Descriptor::Organic) {
        classes.button_rounded = "rounded-full".into();
        classes.card_rounded = "rounded-3xl".into();
        classes.background_pattern = "bg-repeat bg-center bg-gray-100 bg-opacity-50".into();
        classes.border_style = "border-dotted border-primary border-2".into();
        classes.text_leading = "leading-loose".into();
        classes.text_tracking = "tracking-wide".into();
    }
    if principle(Descriptor::Bold) {
        classes.header_shadow = "shadow-2xl".into();
        classes.card_shadow = "shadow-xl".into();
        classes.section_padding = padding(spacing.sm);
        classes.border_style = "border-solid border-accent border-4".into();
        classes.text_leading = "leading-tight".into();
        classes.text_tracking = "tracking-wider".into();
    }
    if principle(Descriptor::Subtle) {
        classes.header_shadow = "shadow-sm".into();
        classes.card_shadow = "shadow-sm".into();
        classes.transition = "transition-all duration-700 ease-in-out".into();
        classes.background_pattern = "bg-white".into();
        classes.border_style = "border-none".into();
        classes.text_leading = "leading-relaxed".into();
        classes.text_tracking = "tracking-normal".into();
    }
    if principle(Descriptor::Clean) {
        classes.card_shadow = "shadow-none".into();
        classes.card_rounded = "rounded-md".into();
        classes.background_pattern = "bg-white".into();
        classes.border_style = "border-gray-100 border".into();
        classes.text_leading = "leading-relaxed".into();
        classes.text_tracking = "tracking-tight".into();
    }
    if principle(Descriptor::Complex) {
        classes.card_shadow = "shadow-xl".into();
        classes.button_rounded = "rounded-lg".into();
        classes.background_pattern = "bg-repeat bg-center bg-gray-200".into();
        classes.border_style = "border-solid border-gray-500 border-2".into();
        classes.text_leading = "leading-tight".into();
        classes.text_tracking = "tracking-normal".into();
    }

    classes
}

/// Grid columns, gap and spans for a layout variant
pub fn grid_classes(
    style: LayoutStyle,
    features: &AggregatedFeatures,
    spacing: &SpacingScale,
) -> GridClasses {
    match style {
        LayoutStyle::Minimal => {
            let settled = features.symmetry_horizontal > SYMMETRIC_THRESHOLD
                && features.symmetry_vertical > SYMMETRIC_THRESHOLD
                && features.visual_balance > CENTRED_BALANCE;
            GridClasses {
                columns: if settled {
                    "md:grid-cols-1 lg:grid-cols-2"
                } else {
                    "md:grid-cols-2 lg:grid-cols-3"
                }
                .into(),
                gap: gap(spacing.lg),
                main_span: None,
                side_span: None,
            }
        }
        LayoutStyle::Dense => GridClasses {
            columns: if features.entropy > WIDE_GRID_ENTROPY {
                "md:grid-cols-3 lg:grid-cols-5"
            } else {
                "md:grid-cols-2 lg:grid-cols-4"
            }
            .into(),
            gap: gap(spacing.sm),
            main_span: None,
            side_span: None,
        },
        LayoutStyle::Creative => {
            let asymmetric = features.symmetry_horizontal < ASYMMETRIC_SYMMETRY
                || features.symmetry_vertical < ASYMMETRIC_SYMMETRY
                || features.has_mood(Descriptor::Dynamic);
            let (main, side) = if asymmetric {
                ("md:col-span-3 lg:col-span-2", "md:col-span-1 lg:col-span-1")
            } else {
                ("md:col-span-2", "md:col-span-1")
            };
            GridClasses {
                columns: "md:grid-cols-3".into(),
                gap: gap(spacing.md),
                main_span: Some(main.into()),
                side_span: Some(side.into()),
            }
        }
    }
}

/// Resolve the layout style and derive spacing and classes
pub fn decide_layout(
    features: &AggregatedFeatures,
    guidelines: &BrandGuidelines,
    requested: LayoutStyle,
) -> LayoutDecision {
    let resolved_layout_style = resolve_layout_style(guidelines, requested);
    let spacing_scale = SpacingScale::from_base(base_spacing_unit(features));
    debug!(?spacing_scale, "Spacing scale");

    LayoutDecision {
        resolved_layout_style,
        style_classes: style_classes(features, guidelines, &spacing_scale),
        grid: grid_classes(resolved_layout_style, features, &spacing_scale),
        spacing_scale,
    }
}
