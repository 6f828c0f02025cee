//! Weighted k-means++ clustering of pixel colours
//!
//! Pixels are collapsed to their distinct colours with a multiplicity weight
//! before clustering, so large flat regions cost no more than a single entry.
//! Several seeded restarts are run and the lowest-inertia result is kept.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::color::space::Rgb;
use crate::io::configuration::{KMEANS_MAX_ITERATIONS, KMEANS_RESTARTS};

/// One cluster of the final partition
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCluster {
    /// Mean colour of the members, per channel in `[0, 255]`
    pub centroid: [f64; 3],
    /// Number of pixels assigned to this cluster
    pub population: u64,
}

impl ColorCluster {
    /// Centroid truncated to 8-bit channels
    pub fn color(&self) -> Rgb {
        let [r, g, b] = self.centroid.map(|c| c.clamp(0.0, 255.0) as u8);
        Rgb::new(r, g, b)
    }
}

struct WeightedPoint {
    position: [f64; 3],
    weight: f64,
    count: u64,
}

struct Partition {
    centroids: Vec<[f64; 3]>,
    assignments: Vec<usize>,
    inertia: f64,
}

/// Cluster pixels into at most `k` colours, ranked by population descending
///
/// `k` is reduced to the number of distinct colours. Ties in population keep
/// the lower cluster index first. Returns an empty list for empty input or
/// `k == 0`.
pub fn cluster_colors(pixels: &[Rgb], k: usize, seed: u64) -> Vec<ColorCluster> {
    let points = weighted_points(pixels);
    let k = k.min(points.len());
    if k == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut best: Option<Partition> = None;

    for _ in 0..KMEANS_RESTARTS {
        let initial = kmeans_plus_plus_init(&points, k, &mut rng);
        let candidate = lloyd(&points, initial);
        if best
            .as_ref()
            .is_none_or(|current| candidate.inertia < current.inertia)
        {
            best = Some(candidate);
        }
    }

    let Some(partition) = best else {
        return Vec::new();
    };

    let mut populations = vec![0_u64; partition.centroids.len()];
    for (point, &cluster) in points.iter().zip(&partition.assignments) {
        if let Some(population) = populations.get_mut(cluster) {
            *population += point.count;
        }
    }

    let mut clusters: Vec<ColorCluster> = partition
        .centroids
        .into_iter()
        .zip(populations)
        .map(|(centroid, population)| ColorCluster {
            centroid,
            population,
        })
        .collect();

    // Stable sort keeps lower indices first on equal populations
    clusters.sort_by(|a, b| b.population.cmp(&a.population));
    clusters
}

fn weighted_points(pixels: &[Rgb]) -> Vec<WeightedPoint> {
    let mut counts: BTreeMap<Rgb, u64> = BTreeMap::new();
    for &pixel in pixels {
        *counts.entry(pixel).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(color, count)| {
            let weight = count as f64;
            WeightedPoint {
                position: color.channels().map(f64::from),
                weight,
                count,
            }
        })
        .collect()
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(position: &[f64; 3], centroids: &[[f64; 3]]) -> (usize, f64) {
    centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| (index, squared_distance(position, centroid)))
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        })
}

/// Pick an index with probability proportional to `weights`
fn sample_weighted(weights: &[f64], rng: &mut StdRng) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > threshold {
            return Some(index);
        }
    }

    weights.iter().rposition(|&w| w > 0.0)
}

fn kmeans_plus_plus_init(points: &[WeightedPoint], k: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let mut centroids = Vec::with_capacity(k);
    let mut chosen = vec![false; points.len()];

    let population: Vec<f64> = points.iter().map(|p| p.weight).collect();
    let first = sample_weighted(&population, rng).unwrap_or(0);
    if let Some(point) = points.get(first) {
        centroids.push(point.position);
        if let Some(flag) = chosen.get_mut(first) {
            *flag = true;
        }
    }

    while centroids.len() < k {
        let scores: Vec<f64> = points
            .iter()
            .zip(&chosen)
            .map(|(point, &taken)| {
                if taken {
                    0.0
                } else {
                    point.weight * nearest(&point.position, &centroids).1
                }
            })
            .collect();

        // Distinct colours always have positive distance, so this only falls
        // through when every point is already a centroid
        let Some(next) = sample_weighted(&scores, rng) else {
            break;
        };

        if let Some(point) = points.get(next) {
            centroids.push(point.position);
        }
        if let Some(flag) = chosen.get_mut(next) {
            *flag = true;
        }
    }

    centroids
}

/// Move every point to its nearest centroid, reporting whether any moved
fn assign(points: &[WeightedPoint], centroids: &[[f64; 3]], assignments: &mut [usize]) -> bool {
    let mut changed = false;
    for (point, assignment) in points.iter().zip(assignments.iter_mut()) {
        let (cluster, _) = nearest(&point.position, centroids);
        if *assignment != cluster {
            *assignment = cluster;
            changed = true;
        }
    }
    changed
}

fn lloyd(points: &[WeightedPoint], mut centroids: Vec<[f64; 3]>) -> Partition {
    let mut assignments = vec![usize::MAX; points.len()];

    for _ in 0..KMEANS_MAX_ITERATIONS {
        if !assign(points, &centroids, &mut assignments) {
            break;
        }

        let mut sums = vec![([0.0_f64; 3], 0.0_f64); centroids.len()];
        for (point, &cluster) in points.iter().zip(&assignments) {
            if let Some((sum, weight)) = sums.get_mut(cluster) {
                for (s, p) in sum.iter_mut().zip(point.position) {
                    *s += p * point.weight;
                }
                *weight += point.weight;
            }
        }

        // Empty clusters keep their previous centroid
        for (centroid, (sum, weight)) in centroids.iter_mut().zip(sums) {
            if weight > 0.0 {
                *centroid = sum.map(|s| s / weight);
            }
        }
    }

    // Hitting the iteration cap leaves assignments one centroid update behind
    assign(points, &centroids, &mut assignments);

    let inertia = points
        .iter()
        .zip(&assignments)
        .map(|(point, &cluster)| {
            centroids
                .get(cluster)
                .map_or(0.0, |c| point.weight * squared_distance(&point.position, c))
        })
        .sum();

    Partition {
        centroids,
        assignments,
        inertia,
    }
}
