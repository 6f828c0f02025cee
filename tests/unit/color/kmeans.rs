//! Tests for weighted k-means colour clustering

#[cfg(test)]
mod tests {
    use themesmith::color::kmeans::cluster_colors;
    use themesmith::color::space::Rgb;

    fn two_tone(red: usize, blue: usize) -> Vec<Rgb> {
        let mut pixels = vec![Rgb::new(255, 0, 0); red];
        pixels.extend(vec![Rgb::new(0, 0, 255); blue]);
        pixels
    }

    // Tests empty input produces no clusters
    // Verified by defaulting to a gray cluster
    #[test]
    fn test_empty_input() {
        assert!(cluster_colors(&[], 5, 42).is_empty());
        assert!(cluster_colors(&two_tone(3, 3), 0, 42).is_empty());
    }

    // Tests cluster count is capped by distinct colours
    // Verified by seeding duplicate centroids
    #[test]
    fn test_single_color() {
        let clusters = cluster_colors(&vec![Rgb::new(255, 0, 0); 100], 5, 42);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.first().map(|c| c.color()), Some(Rgb::new(255, 0, 0)));
        assert_eq!(clusters.first().map(|c| c.population), Some(100));
    }

    // Tests clusters are ranked by population
    // Verified by sorting ascending
    #[test]
    fn test_ranked_by_population() {
        let clusters = cluster_colors(&two_tone(30, 70), 5, 42);
        assert_eq!(clusters.len(), 2);

        let colors: Vec<Rgb> = clusters.iter().map(|c| c.color()).collect();
        assert_eq!(colors, vec![Rgb::new(0, 0, 255), Rgb::new(255, 0, 0)]);

        let populations: Vec<u64> = clusters.iter().map(|c| c.population).collect();
        assert_eq!(populations, vec![70, 30]);
    }

    // Tests nearby shades merge into one centroid
    // Verified by skipping the centroid update
    #[test]
    fn test_merges_similar_shades() {
        let mut pixels = vec![Rgb::new(250, 0, 0); 10];
        pixels.extend(vec![Rgb::new(240, 10, 0); 10]);
        pixels.extend(vec![Rgb::new(0, 0, 250); 5]);

        let clusters = cluster_colors(&pixels, 2, 7);
        assert_eq!(clusters.len(), 2);
        let reds = clusters.first().map(|c| (c.color(), c.population));
        assert_eq!(reds, Some((Rgb::new(245, 5, 0), 20)));
    }

    // Tests populations account for every pixel
    // Verified by counting distinct colours instead of pixels
    #[test]
    fn test_population_total() {
        let pixels: Vec<Rgb> = (0..=255_u8)
            .map(|v| Rgb::new(v, v / 2, 255 - v))
            .cycle()
            .take(1000)
            .collect();
        let clusters = cluster_colors(&pixels, 5, 42);
        assert_eq!(clusters.len(), 5);
        assert_eq!(clusters.iter().map(|c| c.population).sum::<u64>(), 1000);
    }

    // Tests a fixed seed is reproducible
    // Verified by seeding from entropy
    #[test]
    fn test_seed_reproducible() {
        let pixels: Vec<Rgb> = (0..200_u8)
            .map(|v| Rgb::new(v, v.wrapping_mul(3), v.wrapping_mul(7)))
            .collect();
        assert_eq!(cluster_colors(&pixels, 5, 42), cluster_colors(&pixels, 5, 42));
    }

    // Tests every pixel is counted against its nearest final centroid
    // Verified by returning assignments from before the last centroid update
    #[test]
    fn test_populations_match_final_centroids() {
        let pixels: Vec<Rgb> = (0..4000_u32)
            .map(|i| {
                let v = i.wrapping_mul(2_654_435_761);
                Rgb::new((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8)
            })
            .collect();
        let clusters = cluster_colors(&pixels, 5, 7);

        let distance = |pixel: &Rgb, centroid: &[f64; 3]| {
            pixel
                .channels()
                .iter()
                .zip(centroid)
                .map(|(&p, c)| (f64::from(p) - c).powi(2))
                .sum::<f64>()
        };

        let mut expected = vec![0_u64; clusters.len()];
        for pixel in &pixels {
            let nearest = clusters
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    distance(pixel, &a.centroid).total_cmp(&distance(pixel, &b.centroid))
                })
                .map(|(index, _)| index)
                .expect("Failed to find a nearest cluster");
            if let Some(count) = expected.get_mut(nearest) {
                *count += 1;
            }
        }

        let populations: Vec<u64> = clusters.iter().map(|c| c.population).collect();
        assert_eq!(populations, expected);
    }
}
