//! `[styles]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [styles]
//! admin = true     # fix SVG thumbnails on the media screen
//! public = true    # let SVG images scale on public pages
//! ```

use serde::{Deserialize, Serialize};

use crate::style::StyleTarget;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Emit the admin media-screen rule.
    pub admin: bool,
    /// Emit the public page-head rule.
    pub public: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            admin: true,
            public: true,
        }
    }
}

impl StylesConfig {
    /// Check whether rules for `target` should be emitted.
    pub fn is_enabled(&self, target: StyleTarget) -> bool {
        match target {
            StyleTarget::Admin => self.admin,
            StyleTarget::PublicHead => self.public,
        }
    }
}
