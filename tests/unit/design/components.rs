//! Tests for component suggestion rules

#[cfg(test)]
mod tests {
    use themesmith::analysis::aggregate::AggregatedFeatures;
    use themesmith::analysis::tags::Descriptor;
    use themesmith::design::components::{COMPONENT_RULES, RuleContext, suggest_components};
    use themesmith::design::guidelines::BrandGuidelines;
    use themesmith::design::layout::LayoutStyle;

    fn names(layout: LayoutStyle, features: &AggregatedFeatures, guidelines: &BrandGuidelines) -> Vec<String> {
        suggest_components(layout, features, guidelines)
            .into_iter()
            .map(|s| s.component)
            .collect()
    }

    // Tests every layout gets its unconditional component
    // Verified by limiting the base rules to the minimal layout
    #[test]
    fn test_base_component_per_layout() {
        let features = AggregatedFeatures::default();
        let guidelines = BrandGuidelines::default();

        assert_eq!(names(LayoutStyle::Minimal, &features, &guidelines), vec!["Modal/Dialog"]);
        assert_eq!(
            names(LayoutStyle::Dense, &features, &guidelines),
            vec!["Tabbed Interface"]
        );
        assert_eq!(
            names(LayoutStyle::Creative, &features, &guidelines),
            vec![
                "Image Carousel/Slider",
                "Interactive Background/Canvas Animation"
            ]
        );
    }

    // Tests rationales embed the triggering metrics
    // Verified by formatting whitespace as a fraction
    #[test]
    fn test_rationale_includes_metrics() {
        let features = AggregatedFeatures {
            whitespace: 0.734,
            aesthetic_score: 7.0,
            ..AggregatedFeatures::default()
        };
        let suggestions =
            suggest_components(LayoutStyle::Minimal, &features, &BrandGuidelines::default());
        let modal = suggestions.first().map(|s| s.rationale.as_str()).unwrap_or_default();

        assert!(modal.contains("(73.4%)"), "{modal}");
        assert!(modal.contains("(7/10)"), "{modal}");
    }

    // Tests layout-agnostic rules fire alongside layout rules in table order
    // Verified by stopping after the first matching rule
    #[test]
    fn test_rules_accumulate_in_order() {
        let mut features = AggregatedFeatures {
            aesthetic_score: 9.0,
            entropy: 7.5,
            fractal_dimension: 1.2,
            symmetry_horizontal: 0.9,
            symmetry_vertical: 0.9,
            ..AggregatedFeatures::default()
        };
        features.moods.insert(Descriptor::Professional);
        let guidelines = BrandGuidelines {
            design_principles: ["clean", "complex"].map(String::from).into_iter().collect(),
            ..BrandGuidelines::default()
        };

        assert_eq!(
            names(LayoutStyle::Minimal, &features, &guidelines),
            vec![
                "Modal/Dialog",
                "Accordion/Collapse",
                "Smooth Scroll/Scroll-to-Top Button",
                "Tooltip/Popover System",
                "Minimalist Image Lightbox",
                "Infinite Scroll/Load More Button",
            ]
        );
    }

    // Tests dense rules triggered by a principle alone
    // Verified by requiring both the metric and the principle
    #[test]
    fn test_complex_principle_triggers_dense_rules() {
        let guidelines = BrandGuidelines {
            design_principles: ["complex".to_string()].into_iter().collect(),
            ..BrandGuidelines::default()
        };
        let found = names(LayoutStyle::Dense, &AggregatedFeatures::default(), &guidelines);

        assert!(found.iter().any(|n| n == "Interactive Chart/Graph"));
        assert!(found.iter().any(|n| n == "Advanced Search with Autocomplete/Filtering"));
        assert!(!found.iter().any(|n| n == "Infinite Scroll/Load More Button"));
    }

    // Tests rules scoped to another layout never fire
    // Verified by ignoring the rule layout
    #[test]
    fn test_layout_scoped_rules() {
        let features = AggregatedFeatures::default();
        let guidelines = BrandGuidelines::default();
        let context = RuleContext {
            layout: LayoutStyle::Dense,
            features: &features,
            guidelines: &guidelines,
        };

        let fired: Vec<_> = COMPONENT_RULES
            .iter()
            .filter(|rule| rule.evaluate(&context).is_some())
            .collect();
        assert!(fired
            .iter()
            .all(|rule| rule.layout.is_none_or(|l| l == LayoutStyle::Dense)));
    }

    // Tests vibrant or energetic moods suggest an animated call to action
    // Verified by only checking the bold principle
    #[test]
    fn test_call_to_action_from_mood() {
        let mut features = AggregatedFeatures::default();
        features.moods.insert(Descriptor::Energetic);
        let found = names(LayoutStyle::Minimal, &features, &BrandGuidelines::default());
        assert!(found.iter().any(|n| n == "Animated Call-to-Action (CTA) Button"));
    }
}
