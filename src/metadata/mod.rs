//! Asset metadata records.
//!
//! Two records are produced for SVG assets, both mirroring the shapes the
//! host already uses for raster images so consumers need no special case:
//!
//! | Record                | Produced by                | Consumer                  |
//! |-----------------------|----------------------------|---------------------------|
//! | [`AssetMetadata`]     | [`writer::generate_metadata`] | host metadata store   |
//! | [`AttachmentResponse`]| [`attachment::prepare_attachment`] | media browser    |
//!
//! Width and height are strings throughout, as declared in the markup.

pub mod attachment;
pub mod writer;

pub use attachment::{AttachmentResponse, AttachmentSize, prepare_attachment};
pub use writer::generate_metadata;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::svg::Orientation;

/// Name of the single size variant recorded for SVG assets.
pub const FULL_SIZE: &str = "full";

/// Metadata the host stores alongside an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    /// Path relative to the upload root (absolute if the root is unknown).
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub sizes: BTreeMap<String, SizeVariant>,
}

impl AssetMetadata {
    /// The `full` size variant, if present.
    pub fn full(&self) -> Option<&SizeVariant> {
        self.sizes.get(FULL_SIZE)
    }
}

/// One rendition of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub url: String,
    /// File name of the rendition.
    pub file: String,
    pub width: String,
    pub height: String,
    pub orientation: Orientation,
    #[serde(rename = "mime-type")]
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_variant_field_names() {
        let variant = SizeVariant {
            url: "/u/a.svg".into(),
            file: "a.svg".into(),
            width: "2".into(),
            height: "1".into(),
            orientation: Orientation::Landscape,
            mime_type: "image/svg+xml".into(),
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["mime-type"], "image/svg+xml");
        assert_eq!(json["orientation"], "landscape");
        assert_eq!(json["width"], "2");
    }

    #[test]
    fn test_metadata_deserializes_partial_record() {
        let meta: AssetMetadata = serde_json::from_str(r#"{"file": "a.svg"}"#).unwrap();
        assert_eq!(meta.file, "a.svg");
        assert!(meta.sizes.is_empty());
        assert!(meta.full().is_none());
    }
}
