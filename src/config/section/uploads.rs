//! `[uploads]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [uploads]
//! root = "uploads"                        # relative to the config file
//! base_url = "https://example.com/uploads"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Directory uploaded assets live under.
    pub root: PathBuf,
    /// Public URL the upload root is served from.
    pub base_url: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("uploads"),
            base_url: "http://localhost/uploads".to_string(),
        }
    }
}

impl UploadsConfig {
    pub const ROOT: FieldPath = FieldPath::new("uploads.root");
    pub const BASE_URL: FieldPath = FieldPath::new("uploads.base_url");

    /// Public URL for a path relative to the upload root.
    pub fn url_for(&self, relative: &Path) -> String {
        let relative = relative.to_string_lossy().replace('\\', "/");
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }

    /// Validate uploads configuration.
    ///
    /// # Checks
    /// - `base_url` is non-empty and absolute (`http(s)://` or `/`)
    /// - `root` exists (warning only: relative paths fall back to absolute)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let url = self.base_url.trim();
        if url.is_empty() {
            diag.error_with_hint(
                Self::BASE_URL,
                "must not be empty",
                "set it to the URL the upload directory is served from",
            );
        } else if !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/'))
        {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("`{url}` is not an absolute URL"),
                "use `https://host/path` or a root-relative `/path`",
            );
        }

        if !self.root.is_dir() {
            diag.warn(
                Self::ROOT,
                format!(
                    "`{}` is not a directory, metadata will store absolute paths",
                    self.root.display()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.uploads.root, PathBuf::from("uploads"));
        assert_eq!(config.uploads.base_url, "http://localhost/uploads");
    }

    #[test]
    fn test_url_for() {
        let uploads = UploadsConfig {
            root: PathBuf::from("/srv/uploads"),
            base_url: "https://example.com/uploads/".into(),
        };
        assert_eq!(
            uploads.url_for(Path::new("2024/05/logo.svg")),
            "https://example.com/uploads/2024/05/logo.svg"
        );
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let uploads = UploadsConfig {
            root: std::env::temp_dir(),
            base_url: "example.com/uploads".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        uploads.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field, UploadsConfig::BASE_URL);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let uploads = UploadsConfig {
            root: std::env::temp_dir(),
            base_url: "  ".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        uploads.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_missing_root_warns() {
        let uploads = UploadsConfig {
            root: PathBuf::from("/definitely/not/a/dir"),
            base_url: "/uploads".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        uploads.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
