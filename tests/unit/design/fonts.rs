//! Tests for font pairing selection and type scale derivation

#[cfg(test)]
mod tests {
    use themesmith::analysis::aggregate::AggregatedFeatures;
    use themesmith::analysis::tags::Descriptor;
    use themesmith::design::fonts::{
        FONT_PAIRINGS, LetterSpacing, LineHeight, PairingContext, base_font_size, best_pairing,
        font_size_scale, score_pairing, suggest_fonts, typographic_recommendations,
    };
    use themesmith::design::guidelines::BrandGuidelines;

    fn guidelines_with_principles(principles: &[&str]) -> BrandGuidelines {
        BrandGuidelines {
            design_principles: principles.iter().map(ToString::to_string).collect(),
            ..BrandGuidelines::default()
        }
    }

    // Tests the base size formula and the simple and busy adjustments
    // Verified by swapping the 1.05 and 0.95 factors
    #[test]
    fn test_base_font_size_adjustments() {
        let neutral = AggregatedFeatures::default();
        assert!((base_font_size(&neutral) - 21.0).abs() < 1e-9);

        let simple = AggregatedFeatures {
            fractal_dimension: 1.2,
            ..AggregatedFeatures::default()
        };
        assert!((base_font_size(&simple) - 22.05).abs() < 1e-9);

        let busy = AggregatedFeatures {
            entropy: 7.0,
            ..AggregatedFeatures::default()
        };
        assert!((base_font_size(&busy) - 19.95).abs() < 1e-9);
    }

    // Tests the scale is monotonic and anchored on the base size
    // Verified by using the plain golden ratio for every step
    #[test]
    fn test_font_size_scale_shape() {
        let features = AggregatedFeatures::default();
        let scale = font_size_scale(21.0, &features);

        assert_eq!(scale.body, 21);
        assert_eq!(scale.small, 13);
        assert_eq!(scale.h6, 34);
        let ordered = [
            scale.caption,
            scale.small,
            scale.body,
            scale.h6,
            scale.h5,
            scale.h4,
            scale.h3,
            scale.h2,
            scale.h1,
            scale.display,
        ];
        assert!(ordered.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }

    // Tests tiny base sizes never produce zero pixel steps
    // Verified by removing the lower clamp
    #[test]
    fn test_font_size_scale_minimum() {
        let scale = font_size_scale(0.1, &AggregatedFeatures::default());
        assert_eq!(scale.caption, 1);
        assert_eq!(scale.body, 1);
    }

    // Tests leading and tracking rules from features, principles and font names
    // Verified by checking tight leading before relaxed
    #[test]
    fn test_typographic_recommendations() {
        let neutral = AggregatedFeatures::default();
        let none = BrandGuidelines::default();

        let plain = typographic_recommendations("Roboto", &neutral, &none);
        assert_eq!(plain.line_height, LineHeight::Normal);
        assert_eq!(plain.letter_spacing, LetterSpacing::Normal);

        let display = typographic_recommendations("Playfair Display", &neutral, &none);
        assert_eq!(display.letter_spacing, LetterSpacing::Wide);

        let airy = AggregatedFeatures {
            whitespace: 0.65,
            entropy: 7.0,
            ..AggregatedFeatures::default()
        };
        let relaxed = typographic_recommendations("Roboto", &airy, &none);
        assert_eq!(relaxed.line_height, LineHeight::Relaxed);

        let crowded = AggregatedFeatures {
            whitespace: 0.3,
            ..AggregatedFeatures::default()
        };
        let clean = guidelines_with_principles(&["clean"]);
        let tight = typographic_recommendations("Roboto", &crowded, &clean);
        assert_eq!(tight.line_height, LineHeight::Relaxed);
        assert_eq!(tight.letter_spacing, LetterSpacing::Tight);

        let dense = typographic_recommendations("Roboto", &crowded, &none);
        assert_eq!(dense.line_height, LineHeight::Tight);
    }

    // Tests neutral features pick the pairing whose complexity fits best
    // Verified by inverting the complexity penalty
    #[test]
    fn test_best_pairing_without_tags() {
        let features = AggregatedFeatures::default();
        let guidelines = BrandGuidelines::default();
        let context = PairingContext::new(&features, &guidelines);

        let best = best_pairing(&context).map(|p| (p.heading, p.body));
        assert_eq!(best, Some(("Montserrat", "Lato")));
    }

    // Tests mood overlap dominates the complexity terms
    // Verified by dropping the mood weight
    #[test]
    fn test_mood_overlap_drives_selection() {
        let mut features = AggregatedFeatures::default();
        features.moods.insert(Descriptor::Techy);

        let result = suggest_fonts(&features, &BrandGuidelines::default());
        assert_eq!(result.heading_font, "Source Code Pro");
        assert_eq!(result.body_font, "Inter");
    }

    // Tests vocabulary principles count as moods for scoring
    // Verified by ignoring principle descriptors in the context
    #[test]
    fn test_principles_join_scoring_tags() {
        let features = AggregatedFeatures::default();
        let guidelines = guidelines_with_principles(&["techy", "not-a-descriptor"]);
        let context = PairingContext::new(&features, &guidelines);
        assert!(context.moods.contains(&Descriptor::Techy));
        assert!(context.styles.contains(&Descriptor::Techy));

        let result = suggest_fonts(&features, &guidelines);
        assert_eq!(result.heading_font, "Source Code Pro");
    }

    // Tests the structured bonus needs symmetry and balance together
    // Verified by accepting either symmetry alone
    #[test]
    fn test_structured_bonus_conditions() {
        let guidelines = guidelines_with_principles(&["structured"]);
        let pairing = FONT_PAIRINGS[11];

        let balanced = AggregatedFeatures {
            symmetry_horizontal: 0.9,
            symmetry_vertical: 0.9,
            visual_balance: 0.85,
            ..AggregatedFeatures::default()
        };
        let lopsided = AggregatedFeatures {
            visual_balance: 0.5,
            ..balanced.clone()
        };

        let with_bonus = score_pairing(&pairing, &PairingContext::new(&balanced, &guidelines));
        let without = score_pairing(&pairing, &PairingContext::new(&lopsided, &guidelines));
        assert!((with_bonus - without - 1.5).abs() < 1e-9);
    }

    // Tests fonts dictated for both roles are used verbatim
    // Verified by running the catalogue search anyway
    #[test]
    fn test_brand_fonts_used_verbatim() {
        let guidelines = BrandGuidelines {
            heading_font: Some("Brand Sans".to_string()),
            body_font: Some("Brand Serif".to_string()),
            ..BrandGuidelines::default()
        };
        let features = AggregatedFeatures::default();
        let result = suggest_fonts(&features, &guidelines);

        assert_eq!(result.heading_font, "Brand Sans");
        assert_eq!(result.body_font, "Brand Serif");
        assert_eq!(
            result.font_size_scale,
            font_size_scale(base_font_size(&features), &features)
        );
    }

    // Tests a single brand font is kept and pulls in its catalogue partner
    // Verified by removing the brand font bonus
    #[test]
    fn test_single_brand_font_biases_partner() {
        let guidelines = BrandGuidelines {
            heading_font: Some("Anton".to_string()),
            ..BrandGuidelines::default()
        };
        let result = suggest_fonts(&AggregatedFeatures::default(), &guidelines);

        assert_eq!(result.heading_font, "Anton");
        assert_eq!(result.body_font, "Open Sans");
    }
}
