//! svgmedia - inspect SVG assets the way the media host sees them.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use svgmedia::cli::{self, Cli};
use svgmedia::config::PluginConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PluginConfig::load(&cli)?;
    cli::run(&cli, &config)
}
