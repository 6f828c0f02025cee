//! Composition metrics over a grayscale intensity array
//!
//! Arrays are indexed `[row, col]`. Every function is total: empty input or
//! degenerate statistics produce a defined fallback instead of NaN.

use ndarray::{ArrayView2, Axis, s};

use crate::io::configuration::{
    GOLDEN_RATIO, GOLDEN_RATIO_TOLERANCE, WHITESPACE_DARK_THRESHOLD, WHITESPACE_LIGHT_THRESHOLD,
};
use crate::math::statistics::{round_to, shannon_entropy};

/// Width over height rounded to 2 decimals, `None` for zero height
pub fn aspect_ratio(width: u32, height: u32) -> Option<f64> {
    (height > 0).then(|| round_to(f64::from(width) / f64::from(height), 2))
}

/// Whether a ratio is within tolerance of the golden ratio or its inverse
pub const fn is_golden_ratio(ratio: f64) -> bool {
    (ratio - GOLDEN_RATIO).abs() < GOLDEN_RATIO_TOLERANCE
        || (ratio - GOLDEN_RATIO.recip()).abs() < GOLDEN_RATIO_TOLERANCE
}

/// Mirror similarity of the top half against the flipped bottom half
pub fn horizontal_symmetry(gray: ArrayView2<'_, u8>) -> f64 {
    mirror_similarity(gray)
}

/// Mirror similarity of the left half against the flipped right half
pub fn vertical_symmetry(gray: ArrayView2<'_, u8>) -> f64 {
    mirror_similarity(gray.reversed_axes())
}

// Compares rows across the horizontal centre line; an odd middle row is skipped
fn mirror_similarity(gray: ArrayView2<'_, u8>) -> f64 {
    let rows = gray.len_of(Axis(0));
    let half = rows / 2;
    let near = gray.slice(s![..half, ..]);
    let far = gray.slice(s![half + rows % 2..;-1, ..]);

    if near.shape() != far.shape() || near.is_empty() {
        return 0.0;
    }

    let difference: u64 = near
        .iter()
        .zip(far.iter())
        .map(|(&a, &b)| u64::from(a.abs_diff(b)))
        .sum();

    let max_difference = 255.0 * near.len() as f64;
    let difference = difference as f64;

    1.0 - difference / max_difference
}

/// Percentage of near-white or near-black pixels, rounded to 2 decimals
pub fn whitespace_percentage(gray: ArrayView2<'_, u8>) -> f64 {
    if gray.is_empty() {
        return 0.0;
    }

    let empty = gray
        .iter()
        .filter(|&&v| v > WHITESPACE_LIGHT_THRESHOLD || v < WHITESPACE_DARK_THRESHOLD)
        .count();

    let share = empty as f64 / gray.len() as f64;
    round_to(share * 100.0, 2)
}

/// Shannon entropy in bits of the 256-bin intensity histogram
pub fn image_entropy(gray: ArrayView2<'_, u8>) -> f64 {
    let mut histogram = [0_u64; 256];
    for &v in &gray {
        if let Some(bin) = histogram.get_mut(usize::from(v)) {
            *bin += 1;
        }
    }
    shannon_entropy(&histogram)
}

/// Closeness of the luminance-weighted centroid to the geometric centre
///
/// `1.0` means perfectly centred. Fully black images score `0.0` and a
/// single pixel scores `1.0`.
pub fn visual_balance(gray: ArrayView2<'_, u8>) -> f64 {
    if gray.is_empty() {
        return 0.0;
    }

    let (mut total, mut weighted_x, mut weighted_y) = (0.0, 0.0, 0.0);
    for ((row, col), &v) in gray.indexed_iter() {
        let v = f64::from(v);
        weighted_x += v * col as f64;
        weighted_y += v * row as f64;
        total += v;
    }

    if total <= 0.0 {
        return 0.0;
    }

    let (rows, cols) = gray.dim();
    let (center_x, center_y) = ((cols as f64 - 1.0) / 2.0, (rows as f64 - 1.0) / 2.0);

    let max_distance = center_x.hypot(center_y);
    if max_distance <= 0.0 {
        return 1.0;
    }

    let distance = (weighted_x / total - center_x).hypot(weighted_y / total - center_y);
    1.0 - (distance / max_distance).min(1.0)
}
