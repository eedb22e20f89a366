//! Declared dimensions of an SVG document.
//!
//! SVG files carry no raster size; the closest thing is the `width` and
//! `height` attributes on the root element. Those are read verbatim:
//! `"100%"` or `"10cm"` come back exactly as written.
//!
//! Extraction never fails from the caller's point of view. Missing files
//! and malformed markup degrade both dimensions to `"0"`. An absent
//! attribute, or one whose value cannot be unescaped, degrades only itself.

use std::{
    fs,
    path::{Path, PathBuf},
};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debug;

/// Value substituted for any dimension that could not be read.
pub const UNKNOWN_DIMENSION: &str = "0";

/// Width and height as declared on the root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: UNKNOWN_DIMENSION.to_string(),
            height: UNKNOWN_DIMENSION.to_string(),
        }
    }
}

impl Dimensions {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// True when neither attribute was found (or the file was unusable).
    pub fn is_unknown(&self) -> bool {
        self.width == UNKNOWN_DIMENSION && self.height == UNKNOWN_DIMENSION
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a document yielded no dimensions.
///
/// Only surfaced by [`read_dimensions`] and [`parse_dimensions`]; the
/// absorbing entry points turn every variant into [`Dimensions::default`].
#[derive(Debug, Error)]
pub enum DimensionError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed markup")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute on root element: {0}")]
    Attribute(String),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("content outside the root element")]
    StrayContent,

    #[error("element `{0}` is never closed")]
    Unclosed(String),
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract declared dimensions from the file at `path`.
///
/// Returns `{"0", "0"}` when the file is missing, unreadable or not
/// well-formed markup.
pub fn extract_dimensions(path: &Path) -> Dimensions {
    read_dimensions(path).unwrap_or_else(|err| {
        debug!("svg"; "{}: {}", path.display(), err);
        Dimensions::default()
    })
}

/// Extract declared dimensions from in-memory markup.
pub fn dimensions_from_str(markup: &str) -> Dimensions {
    parse_dimensions(markup).unwrap_or_else(|err| {
        debug!("svg"; "{}", err);
        Dimensions::default()
    })
}

/// Read a file and parse its root dimensions, reporting why it failed.
pub fn read_dimensions(path: &Path) -> Result<Dimensions, DimensionError> {
    let content =
        fs::read_to_string(path).map_err(|err| DimensionError::Io(path.to_path_buf(), err))?;
    parse_dimensions(&content)
}

/// Parse a whole document and return its root element's dimensions.
///
/// The document is read to the end so that trailing garbage, mismatched
/// tags or a second root element reject it just like a broken prolog.
pub fn parse_dimensions(markup: &str) -> Result<Dimensions, DimensionError> {
    let markup = markup.strip_prefix('\u{feff}').unwrap_or(markup);
    let mut reader = Reader::from_str(markup);

    let mut root: Option<Dimensions> = None;
    let mut open: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if open.is_empty() {
                    root = Some(root_dimensions(&reader, &e, root.is_some())?);
                }
                open.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Empty(e) => {
                if open.is_empty() {
                    root = Some(root_dimensions(&reader, &e, root.is_some())?);
                }
            }
            Event::End(_) => {
                if open.pop().is_none() {
                    return Err(DimensionError::StrayContent);
                }
            }
            Event::Text(e) => {
                if open.is_empty() && !e.iter().all(u8::is_ascii_whitespace) {
                    return Err(DimensionError::StrayContent);
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
            Event::Eof => break,
            _ => {
                if open.is_empty() {
                    return Err(DimensionError::StrayContent);
                }
            }
        }
    }

    if let Some(name) = open.pop() {
        return Err(DimensionError::Unclosed(name));
    }

    root.ok_or(DimensionError::NoRoot)
}

/// Read `width`/`height` off the root element.
fn root_dimensions(
    reader: &Reader<&[u8]>,
    element: &BytesStart<'_>,
    seen_root: bool,
) -> Result<Dimensions, DimensionError> {
    if seen_root {
        return Err(DimensionError::MultipleRoots);
    }

    let mut dims = Dimensions::default();
    for attr in element.attributes() {
        let attr = attr.map_err(|err| DimensionError::Attribute(err.to_string()))?;
        let slot = match attr.key.as_ref() {
            b"width" => &mut dims.width,
            b"height" => &mut dims.height,
            _ => continue,
        };
        // Values that cannot be unescaped (e.g. entities from an internal
        // DTD subset) leave only that dimension unknown.
        match attr.decode_and_unescape_value(reader.decoder()) {
            Ok(value) => *slot = value.into_owned(),
            Err(err) => {
                let key = String::from_utf8_lossy(attr.key.as_ref());
                debug!("svg"; "unreadable `{}` value: {}", key, err);
            }
        }
    }

    Ok(dims)
}
