//! Tests for brand guideline parsing, inference and resolution

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use themesmith::ThemeError;
    use themesmith::analysis::aggregate::AggregatedFeatures;
    use themesmith::analysis::tags::Descriptor;
    use themesmith::design::guidelines::{
        BrandGuidelines, LayoutPreference, infer_brand_guidelines, load_brand_guidelines,
        resolve_brand_guidelines,
    };

    fn principles(guidelines: &BrandGuidelines) -> Vec<&str> {
        guidelines
            .design_principles
            .iter()
            .map(String::as_str)
            .collect()
    }

    // Tests a fully valid document is accepted without diagnostics
    // Verified by skipping the accent colour branch
    #[test]
    fn test_valid_document_parses_every_key() {
        let parsed = BrandGuidelines::from_json_value(&json!({
            "primaryColor": "#1a2b3c",
            "secondaryColor": "#fff",
            "accentColor": "#FF8800",
            "headingFont": "Montserrat",
            "bodyFont": "Lato",
            "layoutPreference": "modern",
            "designPrinciples": ["  Clean ", "Bold"]
        }));

        assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
        let guidelines = parsed.guidelines;
        assert_eq!(guidelines.primary_color.as_deref(), Some("#1A2B3C"));
        assert_eq!(guidelines.secondary_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(guidelines.accent_color.as_deref(), Some("#FF8800"));
        assert_eq!(guidelines.heading_font.as_deref(), Some("Montserrat"));
        assert_eq!(guidelines.body_font.as_deref(), Some("Lato"));
        assert_eq!(guidelines.layout_preference, Some(LayoutPreference::Modern));
        assert_eq!(principles(&guidelines), vec!["bold", "clean"]);
        assert!(guidelines.has_principle(Descriptor::Clean));
    }

    // Tests each invalid key is dropped on its own with a diagnostic
    // Verified by rejecting the whole document on the first bad key
    #[test]
    fn test_invalid_keys_dropped_individually() {
        let parsed = BrandGuidelines::from_json_value(&json!({
            "primaryColor": "red",
            "secondaryColor": "#12345",
            "headingFont": "",
            "bodyFont": 12,
            "layoutPreference": "Brutalist",
            "designPrinciples": ["clean", 3],
            "accentColor": "#00ff00"
        }));

        assert_eq!(parsed.diagnostics.len(), 6);
        assert!(parsed.diagnostics.iter().any(|d| d.contains("'primaryColor'")));
        assert!(parsed.diagnostics.iter().any(|d| d.contains("'layoutPreference'")));
        assert_eq!(parsed.guidelines.accent_color.as_deref(), Some("#00FF00"));
        assert_eq!(parsed.guidelines.primary_color, None);
        assert_eq!(parsed.guidelines.heading_font, None);
        assert_eq!(parsed.guidelines.layout_preference, None);
        assert_eq!(principles(&parsed.guidelines), vec!["clean"]);
    }

    // Tests layout tokens are matched exactly
    // Verified by lowercasing the token before matching
    #[test]
    fn test_layout_preference_is_case_sensitive() {
        assert_eq!(LayoutPreference::parse("bold"), Some(LayoutPreference::Bold));
        assert_eq!(LayoutPreference::parse("Bold"), None);
        assert_eq!(LayoutPreference::Minimalist.to_string(), "minimalist");
    }

    // Tests non-object documents and unknown keys are reported
    // Verified by silently accepting arrays as empty guidelines
    #[test]
    fn test_non_object_and_unknown_keys() {
        let parsed = BrandGuidelines::from_json_value(&json!(["#FFFFFF"]));
        assert!(parsed.guidelines.is_empty());
        assert_eq!(parsed.diagnostics.len(), 1);

        let parsed = BrandGuidelines::from_json_value(&json!({ "logo": "brand.svg" }));
        assert!(parsed.guidelines.is_empty());
        assert!(parsed.diagnostics.iter().any(|d| d.contains("'logo'")));
    }

    // Tests principles outside the vocabulary are kept but not mapped
    // Verified by discarding unknown principle tokens
    #[test]
    fn test_free_form_principles_kept() {
        let parsed = BrandGuidelines::from_json_value(&json!({
            "designPrinciples": ["trustworthy", "organic"]
        }));
        let guidelines = parsed.guidelines;
        assert!(guidelines.design_principles.contains("trustworthy"));
        assert_eq!(
            guidelines.principle_descriptors().collect::<Vec<_>>(),
            vec![Descriptor::Organic]
        );
    }

    // Tests file loading distinguishes missing files from bad JSON
    // Verified by mapping both failures to the same variant
    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let missing = load_brand_guidelines(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ThemeError::FileSystem { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").expect("Failed to write fixture");
        let parsed = load_brand_guidelines(&broken);
        assert!(matches!(parsed, Err(ThemeError::GuidelineParse { .. })));

        let valid = dir.path().join("valid.json");
        fs::write(&valid, r#"{"headingFont": "Inter"}"#).expect("Failed to write fixture");
        let loaded = load_brand_guidelines(&valid).expect("Failed to load guidelines");
        assert_eq!(loaded.guidelines.heading_font.as_deref(), Some("Inter"));
    }

    // Tests serialized guidelines use camelCase and omit unset keys
    // Verified by removing the skip attribute
    #[test]
    fn test_serialization_shape() {
        let guidelines = BrandGuidelines {
            primary_color: Some("#112233".to_string()),
            layout_preference: Some(LayoutPreference::Bold),
            ..BrandGuidelines::default()
        };
        let value = serde_json::to_value(&guidelines).expect("Failed to serialize guidelines");
        assert_eq!(value["primaryColor"], "#112233");
        assert_eq!(value["layoutPreference"], "bold");
        assert!(value.get("headingFont").is_none());
        assert_eq!(value["designPrinciples"], json!([]));
    }

    // Tests layout inference precedence over whitespace and moods
    // Verified by checking dense before minimalist
    #[test]
    fn test_inferred_layout_precedence() {
        let mut features = AggregatedFeatures {
            whitespace: 0.8,
            ..AggregatedFeatures::default()
        };
        features.moods.insert(Descriptor::Dense);
        assert_eq!(
            infer_brand_guidelines(&features).layout_preference,
            Some(LayoutPreference::Minimalist)
        );

        let features = AggregatedFeatures {
            whitespace: 0.2,
            ..AggregatedFeatures::default()
        };
        assert_eq!(
            infer_brand_guidelines(&features).layout_preference,
            Some(LayoutPreference::Bold)
        );

        let features = AggregatedFeatures {
            entropy: 6.8,
            ..AggregatedFeatures::default()
        };
        assert_eq!(
            infer_brand_guidelines(&features).layout_preference,
            Some(LayoutPreference::Modern)
        );

        assert_eq!(
            infer_brand_guidelines(&AggregatedFeatures::default()).layout_preference,
            Some(LayoutPreference::Classic)
        );
    }

    // Tests several principle rules can fire together
    // Verified by stopping at the first matching rule
    #[test]
    fn test_inferred_principles_accumulate() {
        let features = AggregatedFeatures {
            whitespace: 0.2,
            entropy: 7.5,
            fractal_dimension: 1.8,
            ..AggregatedFeatures::default()
        };
        let guidelines = infer_brand_guidelines(&features);
        assert_eq!(principles(&guidelines), vec!["bold", "complex", "organic"]);
        assert_eq!(guidelines.primary_color, None);
        assert_eq!(guidelines.heading_font, None);

        let features = AggregatedFeatures {
            symmetry_horizontal: 0.9,
            symmetry_vertical: 0.9,
            visual_balance: 0.95,
            aesthetic_score: 8.0,
            fractal_dimension: 1.2,
            whitespace: 0.72,
            ..AggregatedFeatures::default()
        };
        let guidelines = infer_brand_guidelines(&features);
        assert_eq!(principles(&guidelines), vec!["clean", "structured", "subtle"]);
    }

    // Tests a partial guideline is never completed by inference
    // Verified by merging inferred keys into supplied guidelines
    #[test]
    fn test_resolution_respects_partial_guidelines() {
        let features = AggregatedFeatures {
            whitespace: 0.9,
            ..AggregatedFeatures::default()
        };

        let supplied = BrandGuidelines {
            body_font: Some("Lato".to_string()),
            ..BrandGuidelines::default()
        };
        let resolved = resolve_brand_guidelines(supplied.clone(), &features);
        assert!(!resolved.inferred);
        assert_eq!(resolved.guidelines, supplied);

        let resolved = resolve_brand_guidelines(BrandGuidelines::default(), &features);
        assert!(resolved.inferred);
        assert_eq!(
            resolved.guidelines.layout_preference,
            Some(LayoutPreference::Minimalist)
        );
    }
}
