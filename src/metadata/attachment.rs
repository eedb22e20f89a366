//! Attachment records prepared for the host's media browser.
//!
//! The host builds one of these per asset before handing it to its media
//! UI. Raster images arrive with their sizes filled in; SVG assets arrive
//! with none, which makes the browser draw them at zero by zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FULL_SIZE;
use crate::config::CompareMode;
use crate::debug;
use crate::host::{AssetId, AssetStore};
use crate::mime;
use crate::svg::{Orientation, extract_dimensions};

/// Media-browser view of an asset.
///
/// Fields this extension does not look at are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentResponse {
    pub id: AssetId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub sizes: BTreeMap<String, AttachmentSize>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AttachmentResponse {
    pub fn new(id: AssetId, url: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            mime: mime.into(),
            sizes: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// One size entry of an attachment response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentSize {
    pub url: String,
    pub width: String,
    pub height: String,
    pub orientation: Orientation,
}

/// Give SVG attachments without sizes a `full` size.
///
/// Responses for other types, or that already list sizes, are returned
/// unchanged.
pub fn prepare_attachment(
    mut response: AttachmentResponse,
    store: &dyn AssetStore,
    mode: CompareMode,
) -> AttachmentResponse {
    if response.mime != mime::types::SVG || !response.sizes.is_empty() {
        return response;
    }

    let Some(path) = store.attached_file(response.id) else {
        debug!("meta"; "{} has no attached file, skipping sizes", response.id);
        return response;
    };

    let dims = extract_dimensions(&path);
    let orientation = Orientation::of(&dims, mode);
    response.sizes.insert(
        FULL_SIZE.to_string(),
        AttachmentSize {
            url: response.url.clone(),
            width: dims.width,
            height: dims.height,
            orientation,
        },
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploadsConfig;
    use crate::host::MemoryAssetStore;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(markup: &str, mime: &str) -> (TempDir, MemoryAssetStore, AssetId) {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("icon.svg");
        fs::write(&file, markup).unwrap();
        let mut store = MemoryAssetStore::new(UploadsConfig {
            root: dir.path().to_path_buf(),
            base_url: "/uploads".into(),
        });
        let id = store.insert(&file, mime);
        (dir, store, id)
    }

    #[test]
    fn test_fills_full_size() {
        let (_dir, store, id) = store_with(r#"<svg width="48" height="96"/>"#, mime::types::SVG);
        let response = AttachmentResponse::new(id, "/uploads/icon.svg", mime::types::SVG);

        let response = prepare_attachment(response, &store, CompareMode::Auto);
        let full = &response.sizes[FULL_SIZE];
        assert_eq!(full.url, "/uploads/icon.svg");
        assert_eq!(full.width, "48");
        assert_eq!(full.height, "96");
        assert_eq!(full.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_existing_sizes_untouched() {
        let (_dir, store, id) = store_with(r#"<svg width="48" height="96"/>"#, mime::types::SVG);
        let mut response = AttachmentResponse::new(id, "/uploads/icon.svg", mime::types::SVG);
        response.sizes.insert(
            "thumbnail".into(),
            AttachmentSize {
                url: "/t.svg".into(),
                width: "1".into(),
                height: "1".into(),
                orientation: Orientation::Portrait,
            },
        );

        let output = prepare_attachment(response.clone(), &store, CompareMode::Auto);
        assert_eq!(output, response);
    }

    #[test]
    fn test_other_mime_untouched() {
        let (_dir, store, id) = store_with("", mime::types::PNG);
        let response = AttachmentResponse::new(id, "/uploads/p.png", mime::types::PNG);
        let output = prepare_attachment(response.clone(), &store, CompareMode::Auto);
        assert_eq!(output, response);
    }

    #[test]
    fn test_unknown_asset_untouched() {
        let (_dir, store, _) = store_with(r#"<svg width="48" height="96"/>"#, mime::types::SVG);
        let response = AttachmentResponse::new(AssetId(404), "/uploads/x.svg", mime::types::SVG);
        let output = prepare_attachment(response.clone(), &store, CompareMode::Auto);
        assert_eq!(output, response);
        assert!(output.sizes.is_empty());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"id": 7, "url": "/u/a.svg", "mime": "image/svg+xml", "title": "Logo", "sizes": {}}"#;
        let response: AttachmentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, AssetId(7));
        assert_eq!(response.extra["title"], "Logo");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["title"], "Logo");
    }
}
