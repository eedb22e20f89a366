//! The SVG extension.

use crate::config::{CompareMode, PluginConfig, StylesConfig};
use crate::host::{AssetId, AssetStore};
use crate::metadata::{self, AssetMetadata, AttachmentResponse};
use crate::mime::{self, MimeMap};
use crate::style::{self, StyleSheet, StyleTarget};

use super::{AttachmentDecorator, MetadataDecorator, MimeMapper, StyleContributor};

/// Teaches the host to accept and display SVG assets.
#[derive(Debug, Clone, Default)]
pub struct SvgSupport {
    compare: CompareMode,
    styles: StylesConfig,
}

impl SvgSupport {
    pub fn new(compare: CompareMode, styles: StylesConfig) -> Self {
        Self { compare, styles }
    }

    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(config.orientation.compare, config.styles.clone())
    }
}

impl MimeMapper for SvgSupport {
    fn map_mimes(&self, mimes: MimeMap) -> MimeMap {
        mime::register_svg(mimes)
    }
}

impl MetadataDecorator for SvgSupport {
    fn decorate_metadata(
        &self,
        metadata: AssetMetadata,
        id: AssetId,
        store: &dyn AssetStore,
    ) -> AssetMetadata {
        metadata::generate_metadata(metadata, id, store, self.compare)
    }
}

impl AttachmentDecorator for SvgSupport {
    fn decorate_attachment(
        &self,
        response: AttachmentResponse,
        store: &dyn AssetStore,
    ) -> AttachmentResponse {
        metadata::prepare_attachment(response, store, self.compare)
    }
}

impl StyleContributor for SvgSupport {
    fn contribute_styles(&self, target: StyleTarget, sheet: &mut StyleSheet) {
        if self.styles.is_enabled(target) {
            style::contribute(target, sheet);
        }
    }
}
