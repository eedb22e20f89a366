//! Command-line interface module.
//!
//! Every command builds the same [`HookRegistry`] a host would build at
//! startup and drives it against an in-memory asset store.

mod args;
pub mod dims;
pub mod meta;
pub mod mimes;
pub mod styles;

pub use args::{Cli, Commands};

use crate::config::PluginConfig;
use crate::hooks::{HookRegistry, SvgSupport};
use anyhow::Result;

/// Registry with the SVG extension registered at every point.
pub fn build_registry(config: &PluginConfig) -> HookRegistry {
    let mut registry = HookRegistry::new();
    registry.register(SvgSupport::from_config(config));
    registry
}

/// Dispatch a parsed command.
pub fn run(cli: &Cli, config: &PluginConfig) -> Result<()> {
    match &cli.command {
        Commands::Dims { files } => dims::print_dimensions(files, config),
        Commands::Meta { file, json } => meta::print_metadata(file, *json, config),
        Commands::Mimes { entries } => mimes::print_mimes(entries, config),
        Commands::Styles { target } => styles::print_styles(*target, config),
    }
}
