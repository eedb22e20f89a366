//! SVG inspection utilities.
//!
//! # Modules
//!
//! - [`dimensions`]: Root-element `width`/`height` extraction
//! - [`orientation`]: Landscape/portrait derivation from declared sizes

pub mod dimensions;
pub mod orientation;

pub use dimensions::{
    DimensionError, Dimensions, dimensions_from_str, extract_dimensions, parse_dimensions,
    read_dimensions,
};
pub use orientation::Orientation;
