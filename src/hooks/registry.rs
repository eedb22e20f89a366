//! Capability traits and the hook registry.

use std::rc::Rc;

use crate::host::{AssetId, AssetStore};
use crate::metadata::{AssetMetadata, AttachmentResponse};
use crate::mime::MimeMap;
use crate::style::{StyleSheet, StyleTarget};

// ============================================================================
// Capabilities
// ============================================================================

/// Adjusts the upload allow-list.
pub trait MimeMapper {
    fn map_mimes(&self, mimes: MimeMap) -> MimeMap;
}

/// Fills in metadata after the host generated it for a new asset.
pub trait MetadataDecorator {
    fn decorate_metadata(
        &self,
        metadata: AssetMetadata,
        id: AssetId,
        store: &dyn AssetStore,
    ) -> AssetMetadata;
}

/// Adjusts the attachment record handed to the media browser.
pub trait AttachmentDecorator {
    fn decorate_attachment(
        &self,
        response: AttachmentResponse,
        store: &dyn AssetStore,
    ) -> AttachmentResponse;
}

/// Appends style output while a page renders.
pub trait StyleContributor {
    fn contribute_styles(&self, target: StyleTarget, sheet: &mut StyleSheet);
}

/// An extension that hooks into every point.
pub trait Extension: MimeMapper + MetadataDecorator + AttachmentDecorator + StyleContributor {}

impl<T> Extension for T where
    T: MimeMapper + MetadataDecorator + AttachmentDecorator + StyleContributor
{
}

// ============================================================================
// Registry
// ============================================================================

/// Handlers registered per extension point, run in registration order.
///
/// Each runner folds its input through every handler, so a handler sees
/// the output of the ones registered before it.
#[derive(Default)]
pub struct HookRegistry {
    mime_mappers: Vec<Rc<dyn MimeMapper>>,
    metadata_decorators: Vec<Rc<dyn MetadataDecorator>>,
    attachment_decorators: Vec<Rc<dyn AttachmentDecorator>>,
    style_contributors: Vec<Rc<dyn StyleContributor>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one extension at every point.
    pub fn register<E: Extension + 'static>(&mut self, extension: E) -> &mut Self {
        let extension = Rc::new(extension);
        self.mime_mappers.push(extension.clone());
        self.metadata_decorators.push(extension.clone());
        self.attachment_decorators.push(extension.clone());
        self.style_contributors.push(extension);
        self
    }

    pub fn add_mime_mapper(&mut self, mapper: impl MimeMapper + 'static) -> &mut Self {
        self.mime_mappers.push(Rc::new(mapper));
        self
    }

    pub fn add_metadata_decorator(
        &mut self,
        decorator: impl MetadataDecorator + 'static,
    ) -> &mut Self {
        self.metadata_decorators.push(Rc::new(decorator));
        self
    }

    pub fn add_attachment_decorator(
        &mut self,
        decorator: impl AttachmentDecorator + 'static,
    ) -> &mut Self {
        self.attachment_decorators.push(Rc::new(decorator));
        self
    }

    pub fn add_style_contributor(
        &mut self,
        contributor: impl StyleContributor + 'static,
    ) -> &mut Self {
        self.style_contributors.push(Rc::new(contributor));
        self
    }

    // ========================================================================
    // Runners
    // ========================================================================

    /// "Allowed upload types requested."
    pub fn upload_mimes(&self, mimes: MimeMap) -> MimeMap {
        self.mime_mappers
            .iter()
            .fold(mimes, |mimes, mapper| mapper.map_mimes(mimes))
    }

    /// "Metadata generated for a new asset."
    pub fn generate_metadata(
        &self,
        metadata: AssetMetadata,
        id: AssetId,
        store: &dyn AssetStore,
    ) -> AssetMetadata {
        self.metadata_decorators
            .iter()
            .fold(metadata, |metadata, decorator| {
                decorator.decorate_metadata(metadata, id, store)
            })
    }

    /// "Attachment prepared for the media browser."
    pub fn prepare_attachment(
        &self,
        response: AttachmentResponse,
        store: &dyn AssetStore,
    ) -> AttachmentResponse {
        self.attachment_decorators
            .iter()
            .fold(response, |response, decorator| {
                decorator.decorate_attachment(response, store)
            })
    }

    /// "Admin screen / public head rendering."
    pub fn render_styles(&self, target: StyleTarget) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        for contributor in &self.style_contributors {
            contributor.contribute_styles(target, &mut sheet);
        }
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercase;

    impl MimeMapper for Uppercase {
        fn map_mimes(&self, mimes: MimeMap) -> MimeMap {
            mimes
                .into_iter()
                .map(|(ext, mime)| (ext, mime.to_uppercase()))
                .collect()
        }
    }

    struct Banner(&'static str);

    impl StyleContributor for Banner {
        fn contribute_styles(&self, target: StyleTarget, sheet: &mut StyleSheet) {
            if target == StyleTarget::Admin {
                sheet.add_inline_style("banner", self.0);
            }
        }
    }

    #[test]
    fn test_empty_registry_is_identity() {
        let registry = HookRegistry::new();
        let mut mimes = MimeMap::default();
        mimes.insert("png".into(), "image/png".into());
        assert_eq!(registry.upload_mimes(mimes.clone()), mimes);
        assert!(registry.render_styles(StyleTarget::Admin).is_empty());
    }

    #[test]
    fn test_mappers_run_in_order() {
        let mut registry = HookRegistry::new();
        registry
            .add_mime_mapper(Uppercase)
            .add_mime_mapper(crate::hooks::SvgSupport::default());

        let mimes = registry.upload_mimes(MimeMap::default());
        // SvgSupport ran last, so its entry is not uppercased
        assert_eq!(mimes["svg"], "image/svg+xml");
    }

    #[test]
    fn test_style_contributors_filter_by_target() {
        let mut registry = HookRegistry::new();
        registry.add_style_contributor(Banner("b {}"));

        let admin = registry.render_styles(StyleTarget::Admin);
        assert_eq!(admin.rules_for("banner").collect::<Vec<_>>(), ["b {}"]);
        assert!(registry.render_styles(StyleTarget::PublicHead).is_empty());
    }
}
