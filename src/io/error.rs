//! Error types for the I/O edge of theme generation
//!
//! The analysis and design engine itself never fails; these errors only arise
//! while decoding images, reading guideline files or writing results.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible theme operations
#[derive(Debug)]
pub enum ThemeError {
    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to re-encode an image for the aesthetic scorer
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Brand guideline file is not valid JSON
    GuidelineParse {
        /// Path to the guideline file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize a decision record
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image for scoring: {source}")
            }
            Self::GuidelineParse { path, source } => {
                write!(
                    f,
                    "Invalid brand guidelines in '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize theme decision: {source}")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageEncode { source } => Some(source),
            Self::GuidelineParse { source, .. } | Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for theme results
pub type Result<T> = std::result::Result<T, ThemeError>;

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}
