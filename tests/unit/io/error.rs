//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use themesmith::ThemeError;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ThemeError::FileSystem {
            path: "/tmp/guidelines.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/guidelines.json"));
        assert!(error.to_string().contains("read"));
    }

    // Tests ImageLoad error includes path and source
    // Verified by excluding source error from message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ThemeError::ImageLoad {
            path: PathBuf::from("/restricted/hero.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/hero.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests guideline parse errors carry the JSON location
    // Verified by dropping the source from Display
    #[test]
    fn test_guideline_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json")
            .err()
            .unwrap_or_else(|| unreachable!("malformed JSON must fail"));
        let error = ThemeError::GuidelineParse {
            path: PathBuf::from("brand.json"),
            source: json_error,
        };

        let message = error.to_string();
        assert!(message.contains("brand.json"));
        assert!(message.contains("line 1"));
    }

    // Tests serde errors convert into Serialization
    // Verified by mapping to FileSystem instead
    #[test]
    fn test_serde_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("[")
            .err()
            .unwrap_or_else(|| unreachable!("truncated JSON must fail"));
        let error: ThemeError = json_error.into();
        assert!(matches!(error, ThemeError::Serialization { .. }));
    }
}
