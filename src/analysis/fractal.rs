//! Box-counting fractal dimension
//!
//! Dark pixels form the foreground mask. Box edges run in powers of two from
//! the smallest power covering the longer side down to the minimum box size,
//! and the dimension is the slope of `ln(occupied boxes)` against
//! `ln(1 / size)`. Boxes are laid over the image itself; the power-of-two
//! padding never holds foreground, so it is never materialised.

use bitvec::prelude::*;
use ndarray::ArrayView2;

use crate::io::configuration::{FRACTAL_FOREGROUND_THRESHOLD, FRACTAL_MIN_BOX_SIZE};
use crate::math::regression::least_squares_slope;

/// Foreground mask stored row-major over the image area
struct ForegroundMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl ForegroundMask {
    fn from_gray(gray: ArrayView2<'_, u8>) -> Self {
        let (rows, cols) = gray.dim();
        let mut bits = bitvec![0; rows * cols];

        for ((row, col), &v) in gray.indexed_iter() {
            if v < FRACTAL_FOREGROUND_THRESHOLD {
                bits.set(row * cols + col, true);
            }
        }

        Self { bits, rows, cols }
    }

    /// Edge of the smallest power-of-two square covering the image
    fn padded_edge(&self) -> usize {
        self.rows.max(self.cols).next_power_of_two()
    }

    fn occupied_boxes(&self, size: usize) -> usize {
        let box_cols = self.cols.div_ceil(size);
        let mut occupied = bitvec![0; self.rows.div_ceil(size) * box_cols];

        for index in self.bits.iter_ones() {
            let (row, col) = (index / self.cols, index % self.cols);
            occupied.set((row / size) * box_cols + col / size, true);
        }

        occupied.count_ones()
    }
}

/// Estimated fractal dimension, `0.0` when it cannot be measured
///
/// Empty images, images without foreground, solid images and images too small
/// to yield two box sizes all return `0.0`.
pub fn fractal_dimension(gray: ArrayView2<'_, u8>) -> f64 {
    let Some(&first) = gray.iter().next() else {
        return 0.0;
    };
    if gray.iter().all(|&v| v == first) {
        return 0.0;
    }

    let mask = ForegroundMask::from_gray(gray);
    if mask.bits.not_any() {
        return 0.0;
    }

    let mut log_inverse_sizes = Vec::new();
    let mut log_counts = Vec::new();

    let mut size = mask.padded_edge();
    while size >= FRACTAL_MIN_BOX_SIZE {
        let count = mask.occupied_boxes(size);
        if count > 0 {
            log_inverse_sizes.push((1.0 / size as f64).ln());
            log_counts.push((count as f64).ln());
        }
        size /= 2;
    }

    least_squares_slope(&log_inverse_sizes, &log_counts).unwrap_or(0.0)
}
