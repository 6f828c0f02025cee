//! Tests for descriptor parsing and tag inference rules

#[cfg(test)]
mod tests {
    use themesmith::analysis::tags::{Descriptor, TagInputs, infer_mood, infer_typography};

    fn inputs(whitespace: f64, symmetry: f64, average_rgb: [f64; 3]) -> TagInputs {
        TagInputs {
            whitespace_percentage: whitespace,
            symmetry_horizontal: symmetry,
            symmetry_vertical: symmetry,
            average_rgb,
        }
    }

    // Tests descriptor tokens parse case-insensitively
    // Verified by comparing without lowercasing
    #[test]
    fn test_descriptor_parse() {
        assert_eq!(Descriptor::parse("Sans-Serif"), Some(Descriptor::SansSerif));
        assert_eq!(Descriptor::parse("  clean "), Some(Descriptor::Clean));
        assert_eq!(Descriptor::parse("whimsical"), None);
        for descriptor in Descriptor::ALL {
            assert_eq!(Descriptor::parse(descriptor.as_str()), Some(descriptor));
        }
    }

    // Tests saturation of the mean colour
    // Verified by averaging per-pixel saturation instead
    #[test]
    fn test_average_saturation() {
        assert!(inputs(50.0, 0.7, [128.0; 3]).average_saturation().abs() < f64::EPSILON);
        assert!((inputs(50.0, 0.7, [255.0, 0.0, 0.0]).average_saturation() - 1.0).abs() < 1e-12);
    }

    // Tests light whitespace with symmetric gray composition
    // Verified by removing the geometric rule
    #[test]
    fn test_typography_light_geometric_serif() {
        let styles = infer_typography(&inputs(80.0, 0.9, [200.0; 3]));
        let expected = [Descriptor::Light, Descriptor::Geometric, Descriptor::Serif];
        assert_eq!(styles, expected.into_iter().collect());
    }

    // Tests dense saturated asymmetric composition
    // Verified by checking expressive only when both axes are low
    #[test]
    fn test_typography_bold_expressive_display() {
        let mut tags = inputs(10.0, 0.9, [250.0, 10.0, 10.0]);
        tags.symmetry_vertical = 0.3;
        let styles = infer_typography(&tags);
        let expected = [Descriptor::Bold, Descriptor::Expressive, Descriptor::Display];
        assert_eq!(styles, expected.into_iter().collect());
    }

    // Tests sans-serif fallback when nothing fires
    // Verified by returning an empty set
    #[test]
    fn test_typography_fallback() {
        let styles = infer_typography(&inputs(50.0, 0.7, [200.0, 150.0, 120.0]));
        assert_eq!(styles, [Descriptor::SansSerif].into_iter().collect());
    }

    // Tests warm and energetic moods from a red cast
    // Verified by swapping the saturation branch
    #[test]
    fn test_mood_red_cast() {
        let warm = infer_mood(&inputs(50.0, 0.7, [150.0, 110.0, 100.0]));
        assert!(warm.contains(&Descriptor::Warm));
        assert!(warm.contains(&Descriptor::Muted));

        let energetic = infer_mood(&inputs(50.0, 0.7, [250.0, 10.0, 10.0]));
        assert!(energetic.contains(&Descriptor::Energetic));
        assert!(energetic.contains(&Descriptor::Vibrant));
    }

    // Tests minimalist whitespace suppresses vibrant
    // Verified by removing vibrant only once
    #[test]
    fn test_mood_minimalist_removes_vibrant() {
        let moods = infer_mood(&inputs(85.0, 0.9, [10.0, 10.0, 250.0]));
        assert!(moods.contains(&Descriptor::Minimalist));
        assert!(!moods.contains(&Descriptor::Vibrant));
        assert!(moods.contains(&Descriptor::Balanced));
        assert!(moods.contains(&Descriptor::Professional));
    }

    // Tests dense asymmetric images are dynamic and creative
    // Verified by averaging only the horizontal axis
    #[test]
    fn test_mood_dense_dynamic() {
        let mut tags = inputs(20.0, 0.6, [120.0, 120.0, 120.0]);
        tags.symmetry_vertical = 0.2;
        let moods = infer_mood(&tags);
        let expected = [
            Descriptor::Muted,
            Descriptor::Dense,
            Descriptor::Dynamic,
            Descriptor::Creative,
        ];
        assert_eq!(moods, expected.into_iter().collect());
    }
}
