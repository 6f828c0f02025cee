//! Small numeric helpers shared by the metric and aggregation code

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Arithmetic mean of the values, or `fallback` when there are none
pub fn mean_or(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        return fallback;
    }
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}

/// Shannon entropy in bits of a frequency histogram
///
/// Empty bins contribute nothing; an all-zero histogram has zero entropy.
pub fn shannon_entropy(histogram: &[u64]) -> f64 {
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;

    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
