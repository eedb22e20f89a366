//! Configuration management for `svgmedia.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/         # Configuration section definitions
//! │   ├── uploads      # [uploads]
//! │   ├── orientation  # [orientation]
//! │   └── styles       # [styles]
//! ├── types/           # Utility types
//! │   ├── error        # ConfigError, ConfigDiagnostics
//! │   └── field        # FieldPath
//! └── mod.rs           # PluginConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section has defaults and
//! the project root becomes the current directory.

pub mod section;
pub mod types;

pub use section::{CompareMode, OrientationConfig, StylesConfig, UploadsConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log, utils::path::normalize_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svgmedia.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Upload directory and URL settings
    #[serde(default)]
    pub uploads: UploadsConfig,

    /// Orientation derivation settings
    #[serde(default)]
    pub orientation: OrientationConfig,

    /// Presentation fixes
    #[serde(default)]
    pub styles: StylesConfig,
}

impl PluginConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; falls back to
    /// defaults rooted at cwd when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    config_path: cwd.join(&cli.config),
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.uploads.root, cli.uploads.as_ref());
        Self::update_option(&mut self.uploads.base_url, cli.base_url.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the upload root against the project root.
    fn normalize_paths(&mut self) {
        self.root = normalize_path(&self.root);
        self.uploads.root = normalize_path(&self.root.join(&self.uploads.root));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.uploads.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> PluginConfig {
    let (parsed, ignored) = PluginConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = PluginConfig::from_str("[uploads\nroot = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = PluginConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.orientation.compare, CompareMode::Auto);
        assert!(config.styles.admin);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[uploads]\nroot = \"media\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PluginConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.uploads.root, PathBuf::from("media"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            "[uploads]\nroot = \"media\"\nbase_url = \"/media\"\n\
             [orientation]\ncompare = \"lexical\"\n\
             [styles]\nadmin = false",
        );
        assert_eq!(config.uploads.base_url, "/media");
        assert_eq!(config.orientation.compare, CompareMode::Lexical);
        assert!(!config.styles.admin);
        assert!(config.styles.public);
    }

    #[test]
    fn test_normalize_paths_joins_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("media")).unwrap();

        let mut config = test_parse_config("[uploads]\nroot = \"media\"");
        config.root = dir.path().to_path_buf();
        config.normalize_paths();

        assert!(config.uploads.root.is_absolute());
        assert!(config.uploads.root.ends_with("media"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svgmedia.toml");
        assert_eq!(find_config_file(&path), None);

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
