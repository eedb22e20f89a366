//! Presentation fixes for SVG assets.
//!
//! Screens that size images from raster metadata draw SVGs at zero by zero.
//! Two static rules, scoped with an `[src$='.svg']` attribute-suffix
//! selector, let them size themselves instead:
//!
//! | Target        | Handle     | Rule                                   |
//! |---------------|------------|----------------------------------------|
//! | admin screen  | `wp-admin` | media-icon thumbnails size to content  |
//! | public head   | `svgmedia` | images scale to their container        |

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Stylesheet handle the admin rule is attached to.
pub const ADMIN_HANDLE: &str = "wp-admin";

/// Stylesheet handle the public rule is attached to.
pub const PUBLIC_HANDLE: &str = "svgmedia";

pub const ADMIN_RULE: &str =
    ".media .media-icon img[src$='.svg'] { width: auto; height: auto; }";

pub const PUBLIC_RULE: &str = "img[src$='.svg'] { width: 100%; height: auto; }";

/// Where style output is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleTarget {
    /// Administrative asset-management screen.
    Admin,
    /// `<head>` of public pages.
    #[value(name = "public")]
    #[serde(rename = "public")]
    PublicHead,
}

impl StyleTarget {
    pub const ALL: [Self; 2] = [Self::Admin, Self::PublicHead];

    /// The fixed rule emitted for this target and the handle it goes under.
    pub fn rule(&self) -> (&'static str, &'static str) {
        match self {
            Self::Admin => (ADMIN_HANDLE, ADMIN_RULE),
            Self::PublicHead => (PUBLIC_HANDLE, PUBLIC_RULE),
        }
    }
}

/// Inline style output collected for one page render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    inline: Vec<(String, String)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule under a stylesheet handle.
    pub fn add_inline_style(&mut self, handle: impl Into<String>, css: impl Into<String>) {
        self.inline.push((handle.into(), css.into()));
    }

    /// Rules attached to `handle`, in insertion order.
    pub fn rules_for<'a>(&'a self, handle: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inline
            .iter()
            .filter(move |(h, _)| h == handle)
            .map(|(_, css)| css.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.inline.is_empty()
    }

    /// Render one `<style>` block per handle, handles in first-use order.
    pub fn render(&self) -> String {
        let mut handles: Vec<&str> = Vec::new();
        for (handle, _) in &self.inline {
            if !handles.contains(&handle.as_str()) {
                handles.push(handle);
            }
        }

        let mut out = String::new();
        for handle in handles {
            let _ = writeln!(out, "<style id=\"{handle}-inline-css\">");
            for css in self.rules_for(handle) {
                let _ = writeln!(out, "{css}");
            }
            out.push_str("</style>\n");
        }
        out
    }
}

/// Emit the presentation fix for `target`.
pub fn contribute(target: StyleTarget, sheet: &mut StyleSheet) {
    let (handle, rule) = target.rule();
    sheet.add_inline_style(handle, rule);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_rule_emitted() {
        let mut sheet = StyleSheet::new();
        contribute(StyleTarget::Admin, &mut sheet);
        let rules: Vec<_> = sheet.rules_for(ADMIN_HANDLE).collect();
        assert_eq!(
            rules,
            [".media .media-icon img[src$='.svg'] { width: auto; height: auto; }"]
        );
    }

    #[test]
    fn test_public_rule_scoped_to_svg() {
        let mut sheet = StyleSheet::new();
        contribute(StyleTarget::PublicHead, &mut sheet);
        let rendered = sheet.render();
        assert!(rendered.starts_with("<style id=\"svgmedia-inline-css\">\n"));
        assert!(rendered.contains("img[src$='.svg']"));
        assert!(rendered.ends_with("</style>\n"));
    }

    #[test]
    fn test_render_groups_by_handle() {
        let mut sheet = StyleSheet::new();
        sheet.add_inline_style("a", "x {}");
        sheet.add_inline_style("b", "y {}");
        sheet.add_inline_style("a", "z {}");
        assert_eq!(
            sheet.render(),
            "<style id=\"a-inline-css\">\nx {}\nz {}\n</style>\n\
             <style id=\"b-inline-css\">\ny {}\n</style>\n"
        );
    }

    #[test]
    fn test_empty_sheet_renders_nothing() {
        assert!(StyleSheet::new().is_empty());
        assert_eq!(StyleSheet::new().render(), "");
    }
}
