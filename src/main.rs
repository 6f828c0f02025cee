//! CLI entry point for image-driven theme generation

use clap::Parser;
use themesmith::io::cli::{Cli, ThemeProcessor, init_tracing};

fn main() -> themesmith::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.default_log_filter());
    let mut processor = ThemeProcessor::new(cli);
    processor.process()
}
