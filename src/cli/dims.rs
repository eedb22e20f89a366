//! `dims` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::PluginConfig;
use crate::svg::{Dimensions, extract_dimensions};
use crate::utils::path::resolve_path;

/// Print `path  width x height` for each file.
///
/// Unusable files print `0 x 0` like any other; `--verbose` logs why.
pub fn print_dimensions(files: &[PathBuf], config: &PluginConfig) -> Result<()> {
    for file in files {
        let path = resolve_path(file, &config.uploads.root);
        let dims = extract_dimensions(&path);
        println!("{}", format_line(file, &dims));
    }
    Ok(())
}

fn format_line(file: &Path, dims: &Dimensions) -> String {
    let size = format!("{} x {}", dims.width, dims.height);
    if dims.is_unknown() {
        format!("{}  {}", file.display(), size.dimmed())
    } else {
        format!("{}  {}", file.display(), size.bold())
    }
}
