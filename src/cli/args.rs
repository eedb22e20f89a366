//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::style::StyleTarget;

/// Inspect SVG assets the way the media host sees them
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: svgmedia.toml)
    #[arg(short = 'C', long, global = true, default_value = "svgmedia.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Upload root directory (overrides `uploads.root`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub uploads: Option<PathBuf>,

    /// Public URL of the upload root (overrides `uploads.base_url`)
    #[arg(short = 'U', long = "base-url", global = true, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the declared dimensions of SVG files
    #[command(visible_alias = "d")]
    Dims {
        /// SVG files (relative paths also resolve against the upload root)
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },

    /// Upload a file to an in-memory host and print its generated metadata
    #[command(visible_alias = "m")]
    Meta {
        /// File to upload
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Print the metadata record and attachment response as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the upload allow-list after registration
    Mimes {
        /// Extra entries the host starts with, e.g. `pdf=application/pdf`
        #[arg(value_name = "EXT=MIME", value_parser = parse_mime_entry)]
        entries: Vec<(String, String)>,
    },

    /// Print the style blocks emitted for a render target
    Styles {
        /// Render target (default: all targets)
        #[arg(short, long, value_enum)]
        target: Option<StyleTarget>,
    },
}

/// Parse an `EXT=MIME` pair.
fn parse_mime_entry(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((ext, mime)) if !ext.is_empty() && !mime.is_empty() => {
            Ok((ext.to_ascii_lowercase(), mime.to_string()))
        }
        _ => Err(format!("expected EXT=MIME, got `{s}`")),
    }
}
