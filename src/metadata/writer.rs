//! Metadata generation for newly stored SVG assets.

use std::collections::BTreeMap;
use std::path::Path;

use super::{AssetMetadata, FULL_SIZE, SizeVariant};
use crate::config::CompareMode;
use crate::debug;
use crate::host::{AssetId, AssetStore};
use crate::mime;
use crate::svg::{Orientation, extract_dimensions};
use crate::utils::path::relative_to;

/// Populate the metadata of an SVG asset.
///
/// Assets stored with any other MIME type get `metadata` back untouched.
/// For SVG assets the record is rebuilt as a whole: declared dimensions,
/// the path relative to the upload root and a single `full` size.
pub fn generate_metadata(
    metadata: AssetMetadata,
    id: AssetId,
    store: &dyn AssetStore,
    mode: CompareMode,
) -> AssetMetadata {
    if store.mime_type(id) != Some(mime::types::SVG) {
        return metadata;
    }

    let Some(path) = store.attached_file(id) else {
        debug!("meta"; "{} has no attached file, leaving metadata as is", id);
        return metadata;
    };
    let url = store.attachment_url(id).unwrap_or_default();

    let file = match store.upload_dir() {
        Ok(root) => relative_to(&path, &root),
        Err(err) => {
            debug!("meta"; "{}, storing absolute path", err);
            path.clone()
        }
    };

    let dims = extract_dimensions(&path);
    let orientation = Orientation::of(&dims, mode);

    let full = SizeVariant {
        url,
        file: file_name(&path),
        width: dims.width.clone(),
        height: dims.height.clone(),
        orientation,
        mime_type: mime::types::SVG.to_string(),
    };

    AssetMetadata {
        width: dims.width,
        height: dims.height,
        file: display_path(&file),
        sizes: BTreeMap::from([(FULL_SIZE.to_string(), full)]),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Forward slashes regardless of platform, as the host stores them.
fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
