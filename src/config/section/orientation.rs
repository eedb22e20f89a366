//! `[orientation]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [orientation]
//! compare = "auto"    # auto | lexical
//! ```

use serde::{Deserialize, Serialize};

/// How `width > height` is decided for declared sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// Numeric when both sides are plain numbers, byte order otherwise.
    #[default]
    Auto,
    /// Always byte order (`"9" > "10"`).
    Lexical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub compare: CompareMode,
}
