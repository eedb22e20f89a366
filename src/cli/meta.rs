//! `meta` command.
//!
//! Runs the whole upload lifecycle for one file: allow-list check, storage,
//! metadata generation and attachment preparation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::PluginConfig;
use crate::host::{AssetStore, MemoryAssetStore};
use crate::metadata::{AssetMetadata, AttachmentResponse};
use crate::mime;
use crate::utils::path::resolve_path;
use crate::{debug, log};

/// Everything the host would persist and show for one upload.
#[derive(Debug, Serialize)]
pub struct UploadReport {
    pub metadata: AssetMetadata,
    pub attachment: AttachmentResponse,
}

/// Upload `file` into an in-memory host and print the result.
pub fn print_metadata(file: &Path, json: bool, config: &PluginConfig) -> Result<()> {
    let report = upload(file, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// Upload `file` and collect the generated records.
pub fn upload(file: &Path, config: &PluginConfig) -> Result<UploadReport> {
    let path = resolve_path(file, &config.uploads.root);
    if !path.is_file() {
        bail!("`{}` is not a file", path.display());
    }

    let registry = super::build_registry(config);
    let mimes = registry.upload_mimes(mime::default_mimes());

    let mut store = MemoryAssetStore::new(config.uploads.clone());
    let id = store
        .upload(&path, &mimes)
        .with_context(|| format!("Failed to upload `{}`", file.display()))?;
    let asset = store.get(id)?.clone();
    debug!("meta"; "stored {} as {} ({})", path.display(), id, asset.mime);

    let metadata = registry.generate_metadata(AssetMetadata::default(), id, &store);
    let attachment = registry.prepare_attachment(
        AttachmentResponse::new(id, asset.url, asset.mime),
        &store,
    );

    if store.mime_type(id) != Some(mime::types::SVG) {
        log!("meta"; "`{}` is not an SVG, metadata left to the host", file.display());
    }

    Ok(UploadReport {
        metadata,
        attachment,
    })
}

fn print_summary(report: &UploadReport) {
    let meta = &report.metadata;
    println!("{:<12} {}", "file".dimmed(), meta.file);
    println!("{:<12} {} x {}", "size".dimmed(), meta.width, meta.height);

    for (name, size) in &meta.sizes {
        println!(
            "{:<12} {} ({}, {}, {})",
            name.bold(),
            size.url,
            size.file,
            size.orientation,
            size.mime_type
        );
    }
}
