//! Interactive component suggestions
//!
//! Rules are independent and evaluated in table order. Each rule that fires
//! appends one suggestion; no rule removes an earlier one.

use serde::Serialize;

use crate::analysis::aggregate::AggregatedFeatures;
use crate::analysis::tags::Descriptor;
use crate::design::guidelines::BrandGuidelines;
use crate::design::layout::LayoutStyle;
use crate::io::configuration::{
    ASYMMETRIC_SYMMETRY, CHAOTIC_ENTROPY, COMPLEX_FRACTAL_DIMENSION, HIGH_AESTHETIC_SCORE,
    SIMPLE_FRACTAL_DIMENSION, STRUCTURED_BALANCE, SYMMETRIC_THRESHOLD, TEXTURED_ENTROPY,
};

/// One suggested UI component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSuggestion {
    /// Component name
    pub component: String,
    /// Recommended flavour of the component
    pub variation: String,
    /// Why the rule fired, with the triggering metrics
    pub rationale: String,
}

/// Inputs shared by every rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Resolved layout style
    pub layout: LayoutStyle,
    /// Aggregated image features
    pub features: &'a AggregatedFeatures,
    /// Active brand guidelines
    pub guidelines: &'a BrandGuidelines,
}

impl RuleContext<'_> {
    fn principle(&self, principle: Descriptor) -> bool {
        self.guidelines.has_principle(principle)
    }

    fn mood(&self, mood: Descriptor) -> bool {
        self.features.has_mood(mood)
    }

    fn whitespace_percent(&self) -> f64 {
        self.features.whitespace * 100.0
    }
}

/// A static suggestion rule
#[derive(Clone, Copy)]
pub struct ComponentRule {
    /// Layout the rule is limited to, or `None` for every layout
    pub layout: Option<LayoutStyle>,
    /// Component name
    pub component: &'static str,
    /// Recommended flavour
    pub variation: &'static str,
    /// Whether the rule fires
    pub applies: fn(&RuleContext<'_>) -> bool,
    /// Rationale text for a firing rule
    pub rationale: fn(&RuleContext<'_>) -> String,
}

impl ComponentRule {
    /// Suggestion for this context, if the rule fires
    pub fn evaluate(&self, context: &RuleContext<'_>) -> Option<ComponentSuggestion> {
        let layout_matches = self.layout.is_none_or(|layout| layout == context.layout);
        (layout_matches && (self.applies)(context)).then(|| ComponentSuggestion {
            component: self.component.to_string(),
            variation: self.variation.to_string(),
            rationale: (self.rationale)(context),
        })
    }
}

const fn always(_: &RuleContext<'_>) -> bool {
    true
}

/// Suggestion rules in evaluation order
pub static COMPONENT_RULES: [ComponentRule; 15] = [
    ComponentRule {
        layout: Some(LayoutStyle::Minimal),
        component: "Modal/Dialog",
        variation: "Simple, clean overlay for calls to action or notifications.",
        applies: always,
        rationale: |c| {
            format!(
                "Minimal layouts benefit from focused interactions. High whitespace ({:.1}%) and aesthetic score ({}/10) support a polished, unobtrusive modal. (Consider using a lightweight library like 'Micromodal.js' or building with pure CSS/JS for minimal footprint.)",
                c.whitespace_percent(),
                c.features.aesthetic_score
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Minimal),
        component: "Accordion/Collapse",
        variation: "Structured content expansion for FAQs or detailed sections.",
        applies: |c| {
            c.features.symmetry_horizontal > SYMMETRIC_THRESHOLD
                && c.features.symmetry_vertical > SYMMETRIC_THRESHOLD
        },
        rationale: |c| {
            format!(
                "High symmetry ({:.2}/{:.2}) and a 'structured' principle (if present) align with organized content display. (Ensure ARIA attributes for accessibility.)",
                c.features.symmetry_horizontal, c.features.symmetry_vertical
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Minimal),
        component: "Smooth Scroll/Scroll-to-Top Button",
        variation: "Subtle, polished navigation enhancements.",
        applies: |c| {
            c.features.aesthetic_score >= HIGH_AESTHETIC_SCORE
                && c.features.fractal_dimension < SIMPLE_FRACTAL_DIMENSION
        },
        rationale: |c| {
            format!(
                "A 'clean' design principle or high aesthetic score ({}/10) suggests attention to detail and refined user experience. (Implement with `window.scrollTo` behavior or a small library like 'ScrollReveal.js' for subtle animations.)",
                c.features.aesthetic_score
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Dense),
        component: "Tabbed Interface",
        variation: "Compact navigation for organizing multiple content panes.",
        applies: always,
        rationale: |c| {
            format!(
                "Dense layouts require efficient space usage. Tabs help categorize information without clutter. High entropy ({:.2}) suggests varied content that benefits from organization. (Consider 'headless UI' libraries like Headless UI or Radix UI for accessible, customizable tabs.)",
                c.features.entropy
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Dense),
        component: "Interactive Chart/Graph",
        variation: "Complex data visualization with hover effects, zooming, and drill-down capabilities (e.g., D3.js, Chart.js).",
        applies: |c| {
            c.features.fractal_dimension > COMPLEX_FRACTAL_DIMENSION
                || c.principle(Descriptor::Complex)
        },
        rationale: |c| {
            format!(
                "High fractal dimension ({:.2}) and 'complex' principle indicate data-rich or intricate visuals, suitable for in-depth interactive data exploration. (Prioritize performance for large datasets.)",
                c.features.fractal_dimension
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Dense),
        component: "Advanced Search with Autocomplete/Filtering",
        variation: "Enhanced search functionality for large datasets or content, with real-time suggestions and faceted filters.",
        applies: |c| c.features.entropy > TEXTURED_ENTROPY || c.principle(Descriptor::Complex),
        rationale: |c| {
            format!(
                "High entropy ({:.2}) or 'complex' principle implies a need for robust content discovery and navigation within a dense information architecture. (Consider libraries like 'Algolia' or 'Fuse.js' for client-side search.)",
                c.features.entropy
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Creative),
        component: "Image Carousel/Slider",
        variation: "Full-width, auto-playing carousel with subtle transitions and parallax effects.",
        applies: always,
        rationale: |c| {
            format!(
                "Creative layouts often feature strong visuals. A dynamic carousel complements a 'creative' or 'dynamic' mood. Aesthetic score ({}/10) encourages smooth, high-quality animations. (Libraries like 'Swiper.js' or 'Slick Carousel' are good starting points.)",
                c.features.aesthetic_score
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Creative),
        component: "Interactive Background/Canvas Animation",
        variation: "Subtle particle effects, generative art, or a WebGL-based 3D scene (e.g., Three.js) as a background.",
        applies: |c| {
            c.features.symmetry_horizontal < ASYMMETRIC_SYMMETRY
                || c.features.symmetry_vertical < ASYMMETRIC_SYMMETRY
                || c.principle(Descriptor::Organic)
        },
        rationale: |c| {
            format!(
                "Low symmetry ({:.2}/{:.2}) or an 'organic' principle suggests a more fluid, layered, and visually engaging experience. (Be mindful of performance and accessibility for motion-sensitive users.)",
                c.features.symmetry_horizontal, c.features.symmetry_vertical
            )
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Creative),
        component: "Lottie Animation (JSON-based)",
        variation: "Lightweight, scalable vector animations for micro-interactions, hero sections, or loading states.",
        applies: |c| c.mood(Descriptor::Playful) || c.principle(Descriptor::Expressive),
        rationale: |_| {
            "A 'playful' mood or 'expressive' principle is perfectly matched by vector-based animations for engaging user experience. (Integrate with 'Lottie-web' library.)".to_string()
        },
    },
    ComponentRule {
        layout: Some(LayoutStyle::Creative),
        component: "Interactive Grid with Hover Effects",
        variation: "Image grid with subtle zoom, overlay, or reveal animations on hover, emphasizing visual harmony.",
        applies: |c| c.features.aesthetic_score >= HIGH_AESTHETIC_SCORE && c.features.golden_ratio_match,
        rationale: |c| {
            format!(
                "High aesthetic score ({}/10) and Golden Ratio alignment suggest a focus on visual perfection, making interactive grids a compelling choice. (Consider 'Masonry.js' for layout and custom CSS/JS for effects.)",
                c.features.aesthetic_score
            )
        },
    },
    ComponentRule {
        layout: None,
        component: "Tooltip/Popover System",
        variation: "Contextual information display on hover or click, with smooth transitions.",
        applies: |c| c.features.aesthetic_score >= HIGH_AESTHETIC_SCORE && c.mood(Descriptor::Professional),
        rationale: |_| {
            "For a highly polished and professional site, precise and unobtrusive information delivery is key. (Libraries like 'Popper.js' or 'Tippy.js' are excellent.)".to_string()
        },
    },
    ComponentRule {
        layout: None,
        component: "Sticky Navigation with Scroll-based Transformations",
        variation: "Header that changes size, opacity, or background on scroll, maintaining a structured feel.",
        applies: |c| c.features.visual_balance >= STRUCTURED_BALANCE && c.principle(Descriptor::Structured),
        rationale: |c| {
            format!(
                "High visual balance ({:.2}) and 'structured' principle support stable yet dynamic UI elements that enhance navigation. (Implement with Intersection Observer API or scroll event listeners.)",
                c.features.visual_balance
            )
        },
    },
    ComponentRule {
        layout: None,
        component: "Animated Call-to-Action (CTA) Button",
        variation: "Eye-catching button with subtle scaling, ripple effect, or gradient shift on hover/click.",
        applies: |c| {
            c.mood(Descriptor::Vibrant)
                || c.mood(Descriptor::Energetic)
                || c.principle(Descriptor::Bold)
        },
        rationale: |_| {
            "A 'vibrant', 'energetic', or 'bold' aesthetic benefits from dynamic, attention-grabbing interactive elements to drive user engagement. (Pure CSS animations combined with JS event listeners.)".to_string()
        },
    },
    ComponentRule {
        layout: None,
        component: "Minimalist Image Lightbox",
        variation: "Clean, full-screen image viewer with simple navigation and subtle fade transitions.",
        applies: |c| c.features.fractal_dimension < SIMPLE_FRACTAL_DIMENSION && c.principle(Descriptor::Clean),
        rationale: |c| {
            format!(
                "Low fractal dimension ({:.2}) and a 'clean' principle suggest a preference for uncluttered visuals, making a minimalist lightbox ideal for showcasing images. (Build with pure JS or a very light library.)",
                c.features.fractal_dimension
            )
        },
    },
    ComponentRule {
        layout: None,
        component: "Infinite Scroll/Load More Button",
        variation: "Dynamically load content as the user scrolls or clicks a 'Load More' button, suitable for large content feeds.",
        applies: |c| c.features.entropy > CHAOTIC_ENTROPY && c.principle(Descriptor::Complex),
        rationale: |c| {
            format!(
                "Very high entropy ({:.2}) and a 'complex' principle imply a large volume of diverse content, which benefits from efficient loading strategies. (Implement with Intersection Observer API.)",
                c.features.entropy
            )
        },
    },
];

/// Suggest components for the resolved layout style
pub fn suggest_components(
    layout: LayoutStyle,
    features: &AggregatedFeatures,
    guidelines: &BrandGuidelines,
) -> Vec<ComponentSuggestion> {
    let context = RuleContext {
        layout,
        features,
        guidelines,
    };

    let suggestions: Vec<ComponentSuggestion> = COMPONENT_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(&context))
        .collect();

    tracing::debug!(
        layout = layout.as_str(),
        count = suggestions.len(),
        "Component suggestions"
    );
    suggestions
}
