//! Tests for per-image progress tracking

#[cfg(test)]
mod tests {
    use std::path::Path;

    use themesmith::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use themesmith::io::progress::{ImageStage, ProgressManager};

    // Tests a single image moves through analysing to done
    // Verified by leaving completed images in the analysing stage
    #[test]
    fn test_single_image_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_image(0, Path::new("photos/hero.png"));
        assert_eq!(pm.stage(0), Some(ImageStage::Analysing));

        pm.complete_image(0, true);
        assert_eq!(pm.stage(0), Some(ImageStage::Done));
        assert_eq!(pm.started(), 1);
        pm.finish();
    }

    // Tests unusable images are marked as skipped
    // Verified by ignoring the usable flag
    #[test]
    fn test_failed_image_stage() {
        let mut pm = ProgressManager::default();
        pm.initialize(2);

        pm.start_image(0, Path::new("ok.png"));
        pm.complete_image(0, true);
        pm.start_image(1, Path::new("broken.png"));
        pm.complete_image(1, false);

        assert_eq!(pm.stage(0), Some(ImageStage::Done));
        assert_eq!(pm.stage(1), Some(ImageStage::Failed));
        pm.finish();
    }

    // Tests batches beyond the bar limit keep tracking every image
    // Verified by dropping states for images without a bar
    #[test]
    fn test_large_batch_tracks_all_images() {
        let mut pm = ProgressManager::new();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS + 4;
        pm.initialize(count);

        for i in 0..count {
            pm.start_image(i, Path::new(&format!("image{i}.png")));
            pm.complete_image(i, i % 2 == 0);
        }

        assert_eq!(pm.started(), count);
        assert_eq!(pm.stage(count - 1), Some(ImageStage::Done));
        assert_eq!(pm.stage(count - 2), Some(ImageStage::Failed));
        pm.finish();
    }

    // Tests out-of-order and out-of-range indices are tolerated
    // Verified by using unchecked indexing
    #[test]
    fn test_out_of_range_indices() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.complete_image(7, true);
        assert_eq!(pm.stage(7), None);

        pm.start_image(4, Path::new("late.png"));
        assert_eq!(pm.started(), 5);
        assert_eq!(pm.stage(4), Some(ImageStage::Analysing));
        pm.finish();
    }

    // Tests an empty batch creates no state
    // Verified by adding a panic for zero images
    #[test]
    fn test_empty_batch() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        assert_eq!(pm.started(), 0);
        pm.finish();
    }
}
