//! Per-image progress display with a batch bar for large inputs

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};

/// Where one image is in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStage {
    /// Decoding and measuring
    Analysing,
    /// Measured successfully
    Done,
    /// Could not be decoded
    Failed,
}

impl ImageStage {
    const fn label(self) -> &'static str {
        match self {
            Self::Analysing => "analysing",
            Self::Done => "✓ done",
            Self::Failed => "✗ skipped",
        }
    }

    const fn position(self) -> u64 {
        match self {
            Self::Analysing => 0,
            Self::Done | Self::Failed => 1,
        }
    }
}

/// Shows the most recent images as individual bars
///
/// Batches larger than the individual bar limit also get an overall bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    image_bars: Vec<ProgressBar>,
    /// (`file name`, `stage`) for each started image
    image_states: Vec<(String, ImageStage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static IMAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>10} [{bar:20.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            image_bars: Vec::new(),
            image_states: Vec::new(),
        }
    }

    /// Create bars for a batch of `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        if image_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(image_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..image_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(1);
            bar.set_style(IMAGE_STYLE.clone());
            self.image_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of images started so far
    pub const fn started(&self) -> usize {
        self.image_states.len()
    }

    /// Stage of a started image
    pub fn stage(&self, index: usize) -> Option<ImageStage> {
        self.image_states.get(index).map(|(_, stage)| *stage)
    }

    /// Mark an image as being analysed
    pub fn start_image(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .to_string();

        if index >= self.image_states.len() {
            self.image_states
                .resize(index + 1, (String::new(), ImageStage::Analysing));
        }
        if let Some(state) = self.image_states.get_mut(index) {
            *state = (display_name, ImageStage::Analysing);
        }
        self.update_bars();
    }

    /// Mark an image as finished, successfully or not
    pub fn complete_image(&mut self, index: usize, usable: bool) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.image_states.get_mut(index) {
            state.1 = if usable {
                ImageStage::Done
            } else {
                ImageStage::Failed
            };
        }
        self.update_bars();
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images analysed");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&(String, ImageStage)> = self
            .image_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (name, stage)) in self.image_bars.iter().zip(visible) {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
            bar.set_prefix(name.clone());
        }

        for bar in self.image_bars.iter().skip(visible.len()) {
            bar.set_position(0);
            bar.set_message("");
            bar.set_prefix("");
        }
    }
}
