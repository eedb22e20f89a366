//! Extension points and their registry.
//!
//! The host exposes a handful of named points in its request lifecycle.
//! Extensions implement one capability trait per point and are registered
//! explicitly into a [`HookRegistry`] at startup; nothing registers itself.
//!
//! | Extension point              | Capability             | Runner method           |
//! |------------------------------|------------------------|-------------------------|
//! | upload allow-list requested  | [`MimeMapper`]         | `upload_mimes`          |
//! | metadata generated           | [`MetadataDecorator`]  | `generate_metadata`     |
//! | attachment prepared for UI   | [`AttachmentDecorator`]| `prepare_attachment`    |
//! | admin / public styles        | [`StyleContributor`]   | `render_styles`         |
//!
//! - `registry`: capability traits and [`HookRegistry`]
//! - `svg`: [`SvgSupport`], the SVG extension

mod registry;
mod svg;

pub use registry::{
    AttachmentDecorator, Extension, HookRegistry, MetadataDecorator, MimeMapper, StyleContributor,
};
pub use svg::SvgSupport;
