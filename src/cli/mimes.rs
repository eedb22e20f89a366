//! `mimes` command.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::PluginConfig;
use crate::mime::{self, MimeMap};

/// Print the allow-list the host ends up with, sorted by extension.
pub fn print_mimes(entries: &[(String, String)], config: &PluginConfig) -> Result<()> {
    let mut mimes = mime::default_mimes();
    mimes.extend(entries.iter().cloned());

    let registry = super::build_registry(config);
    let mimes = registry.upload_mimes(mimes);

    for (ext, mime) in sorted(&mimes) {
        if ext == mime::SVG_EXTENSION {
            println!("{:<16} {}", ext.bright_green().bold(), mime);
        } else {
            println!("{ext:<16} {mime}");
        }
    }
    Ok(())
}

fn sorted(mimes: &MimeMap) -> Vec<(&str, &str)> {
    let mut entries: Vec<_> = mimes
        .iter()
        .map(|(ext, mime)| (ext.as_str(), mime.as_str()))
        .collect();
    entries.sort_unstable();
    entries
}
