//! Host collaborator interface.
//!
//! The extension never owns assets. It asks the host where an asset lives,
//! what type it was stored as and which URL serves it, through
//! [`AssetStore`]. [`MemoryAssetStore`] is a self-contained host used by the
//! command line and tests.

mod memory;

pub use memory::{MemoryAssetStore, StoredAsset};

use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Host-assigned asset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failures reported by the host's asset store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("asset {0} not found")]
    NotFound(AssetId),

    #[error("upload directory `{0}` is unavailable")]
    UploadDir(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not an allowed upload type")]
    Disallowed(PathBuf),
}

/// What the extension needs from the host's asset store.
pub trait AssetStore {
    /// MIME type the asset was stored with.
    fn mime_type(&self, id: AssetId) -> Option<&str>;

    /// Absolute path of the stored file.
    fn attached_file(&self, id: AssetId) -> Option<PathBuf>;

    /// Public URL of the stored file.
    fn attachment_url(&self, id: AssetId) -> Option<String>;

    /// Absolute upload root, if it can be resolved.
    fn upload_dir(&self) -> Result<PathBuf, StoreError>;
}
