//! svgmedia - SVG upload support for content-management hosts.
//!
//! Hosts that size media from raster headers cannot upload SVG files and,
//! once they can, draw them at zero by zero. This crate provides the pieces
//! a host registers to fix that:
//!
//! - [`mime`]: adds `svg → image/svg+xml` to the upload allow-list
//! - [`svg`]: reads declared `width`/`height` off the root element
//! - [`metadata`]: builds the metadata record and media-browser sizes
//! - [`style`]: inline style rules for the admin screen and public pages
//! - [`hooks`]: capability traits, [`hooks::HookRegistry`] and [`hooks::SvgSupport`]
//! - [`host`]: the asset-store interface the host implements
//!
//! # Example
//!
//! ```ignore
//! let mut registry = HookRegistry::new();
//! registry.register(SvgSupport::from_config(&config));
//!
//! let mimes = registry.upload_mimes(host_mimes);
//! let meta = registry.generate_metadata(AssetMetadata::default(), id, &store);
//! ```

pub mod cli;
pub mod config;
pub mod hooks;
pub mod host;
pub mod logger;
pub mod metadata;
pub mod mime;
pub mod style;
pub mod svg;
pub mod utils;
