//! Command-line front end writing the theme decision as JSON

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::color::palette::{PaletteStyle, ThemeMode};
use crate::design::guidelines::{BrandGuidelines, load_brand_guidelines};
use crate::design::layout::LayoutStyle;
use crate::engine::generator::{GenerationOptions, ThemeDecision, ThemeGenerator};
use crate::io::configuration::{DEFAULT_LOG_FILTER, DEFAULT_SEED};
use crate::io::error::{Result, ThemeError};
use crate::io::progress::ProgressManager;

#[derive(Parser, Debug)]
#[command(name = "themesmith")]
#[command(
    author,
    version,
    about = "Derive a colour palette, typography and layout from images"
)]
/// Command-line arguments for theme generation
pub struct Cli {
    /// Input images
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<PathBuf>,

    /// Bias the palette towards a light or dark theme
    #[arg(short, long, value_enum, default_value_t = ThemeMode::Light)]
    pub mode: ThemeMode,

    /// Layout used when the brand guidelines state no preference
    #[arg(short, long, value_enum, default_value_t = LayoutStyle::Minimal)]
    pub layout_style: LayoutStyle,

    /// Colour treatment applied to the extracted palette
    #[arg(short, long, value_enum, default_value_t = PaletteStyle::Vibrant)]
    pub color_palette: PaletteStyle,

    /// JSON file with brand colours, fonts, layout preference and principles
    #[arg(short, long, value_name = "JSON")]
    pub brand_guidelines: Option<PathBuf>,

    /// Seed for palette clustering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the decision to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress bars and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation options selected by the flags
    pub const fn options(&self) -> GenerationOptions {
        GenerationOptions {
            mode: self.mode,
            palette_style: self.color_palette,
            layout_style: self.layout_style,
            seed: self.seed,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { DEFAULT_LOG_FILTER }
    }
}

/// Install a stderr tracing subscriber
///
/// `RUST_LOG` takes precedence over the fallback filter. Repeated calls keep
/// the first subscriber.
pub fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // A host process or earlier call may already own the global subscriber
    if let Err(e) = installed {
        debug!(error = %e, "Keeping existing tracing subscriber");
    }
}

/// Runs one generation from parsed arguments
pub struct ThemeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ThemeProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Guidelines from `--brand-guidelines`, or empty ones
    ///
    /// A missing or malformed file is a warning, not an error.
    pub fn brand_guidelines(&self) -> BrandGuidelines {
        let Some(path) = &self.cli.brand_guidelines else {
            return BrandGuidelines::default();
        };

        match load_brand_guidelines(path) {
            Ok(parsed) => parsed.guidelines,
            Err(error) => {
                warn!(%error, "Continuing without brand guidelines");
                BrandGuidelines::default()
            }
        }
    }

    /// Analyse every image and build the decision
    pub fn generate(&mut self) -> ThemeDecision {
        let generator = ThemeGenerator::new(self.cli.options());
        let guidelines = self.brand_guidelines();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.images.len());
        }

        let mut analyzed = Vec::with_capacity(self.cli.images.len());
        for (index, path) in self.cli.images.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_image(index, path);
            }

            let image = generator.analyze_path(path);

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image(index, image.is_usable());
            }
            analyzed.push(image);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        generator.decide(analyzed, guidelines)
    }

    /// Generate and write the decision as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the decision cannot be serialized or written
    pub fn process(&mut self) -> Result<()> {
        let decision = self.generate();
        let json = serde_json::to_string_pretty(&decision)?;

        match &self.cli.output {
            Some(path) => {
                fs::write(path, format!("{json}\n")).map_err(|e| ThemeError::FileSystem {
                    path: path.clone(),
                    operation: "write theme decision",
                    source: e,
                })?;
                info!(path = %path.display(), "Theme decision written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}").map_err(|e| ThemeError::FileSystem {
                    path: PathBuf::from("<stdout>"),
                    operation: "write theme decision",
                    source: e,
                })?;
            }
        }

        Ok(())
    }
}
