//! Ordinary least-squares line fitting

use num_traits::Float;

/// Slope of the least-squares line through `(x, y)` pairs
///
/// Returns `None` when fewer than two points are given, the slices differ in
/// length, or every `x` is identical so the slope is undefined.
pub fn least_squares_slope<T: Float>(xs: &[T], ys: &[T]) -> Option<T> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = T::from(xs.len())?;
    let mean_x = xs.iter().fold(T::zero(), |acc, &x| acc + x) / n;
    let mean_y = ys.iter().fold(T::zero(), |acc, &y| acc + y) / n;

    let (covariance, variance) = xs.iter().zip(ys).fold(
        (T::zero(), T::zero()),
        |(cov, var), (&x, &y)| {
            let dx = x - mean_x;
            (dx.mul_add(y - mean_y, cov), dx.mul_add(dx, var))
        },
    );

    if variance <= T::epsilon() {
        return None;
    }

    Some(covariance / variance)
}
