//! Tests for rounding, mean and entropy helpers

#[cfg(test)]
mod tests {
    use themesmith::math::statistics::{mean_or, round_to, shannon_entropy};

    // Tests decimal rounding
    // Verified by truncating instead of rounding
    #[test]
    fn test_round_to() {
        assert!((round_to(1.776_9, 2) - 1.78).abs() < 1e-12);
        assert!((round_to(0.123_456, 3) - 0.123).abs() < 1e-12);
        assert!((round_to(-2.5, 0) + 3.0).abs() < 1e-12);
    }

    // Tests fallback for empty input
    // Verified by returning zero for empty input
    #[test]
    fn test_mean_or() {
        assert!((mean_or(&[], 4.0) - 4.0).abs() < f64::EPSILON);
        assert!((mean_or(&[1.0, 2.0, 6.0], 0.0) - 3.0).abs() < f64::EPSILON);
    }

    // Tests entropy of uniform and degenerate histograms
    // Verified by using natural log
    #[test]
    fn test_shannon_entropy() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0, 0, 10]).abs() < f64::EPSILON);
        assert!((shannon_entropy(&[5, 5]) - 1.0).abs() < 1e-12);
        assert!((shannon_entropy(&[1, 1, 1, 1]) - 2.0).abs() < 1e-12);
    }
}
