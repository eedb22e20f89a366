//! MIME type handling and upload allow-list registration.
//!
//! The host keeps an allow-list mapping file extensions (or `|`-joined
//! extension groups such as `jpg|jpeg|jpe`) to MIME types. Uploads whose
//! extension is not on the list are rejected before any other hook runs.

use rustc_hash::FxHashMap;
use std::path::Path;

/// Extension → MIME type allow-list as handed around by the host.
pub type MimeMap = FxHashMap<String, String>;

/// Common MIME type constants.
pub mod types {
    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
}

/// Extension key registered for SVG uploads.
pub const SVG_EXTENSION: &str = "svg";

/// Add the SVG entry to an upload allow-list.
///
/// Any existing `svg` entry is overwritten; every other entry passes
/// through untouched, so applying this twice yields the same map.
pub fn register_svg(mut mimes: MimeMap) -> MimeMap {
    mimes.insert(SVG_EXTENSION.to_string(), types::SVG.to_string());
    mimes
}

/// Look up the MIME type for a path's extension in an allow-list.
///
/// Keys may hold several extensions joined with `|`. Matching is
/// case-insensitive on the extension. An exact key wins over grouped keys;
/// among several grouped keys the lexicographically smallest one is used.
pub fn lookup<'a>(mimes: &'a MimeMap, path: &Path) -> Option<&'a str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if let Some(mime) = mimes.get(&ext) {
        return Some(mime.as_str());
    }

    mimes
        .iter()
        .filter(|(key, _)| key.split('|').any(|k| k.eq_ignore_ascii_case(&ext)))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, mime)| mime.as_str())
}

/// The allow-list a stock host starts from before extensions run.
pub fn default_mimes() -> MimeMap {
    let mut mimes = MimeMap::default();
    mimes.insert("jpg|jpeg|jpe".into(), types::JPEG.into());
    mimes.insert("png".into(), types::PNG.into());
    mimes.insert("gif".into(), types::GIF.into());
    mimes.insert("webp".into(), types::WEBP.into());
    mimes
}
