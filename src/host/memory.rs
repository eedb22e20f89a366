//! In-memory asset store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;

use super::{AssetId, AssetStore, StoreError};
use crate::config::UploadsConfig;
use crate::debug;
use crate::mime::{self, MimeMap};
use crate::utils::path::{normalize_path, relative_to};

/// One stored asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub path: PathBuf,
    pub mime: String,
    pub url: String,
}

/// Asset store that keeps records in memory and files where they are.
#[derive(Debug)]
pub struct MemoryAssetStore {
    uploads: UploadsConfig,
    assets: FxHashMap<AssetId, StoredAsset>,
    next_id: u64,
}

impl MemoryAssetStore {
    pub fn new(uploads: UploadsConfig) -> Self {
        Self {
            uploads,
            assets: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Upload a file, checking its extension against the allow-list.
    pub fn upload(&mut self, path: &Path, mimes: &MimeMap) -> Result<AssetId, StoreError> {
        let mime = mime::lookup(mimes, path)
            .ok_or_else(|| StoreError::Disallowed(path.to_path_buf()))?
            .to_string();
        Ok(self.insert(path, mime))
    }

    /// Record a file with an explicit MIME type.
    pub fn insert(&mut self, path: &Path, mime: impl Into<String>) -> AssetId {
        let path = normalize_path(path);
        let url = self.url_for(&path);

        let id = AssetId(self.next_id);
        self.next_id += 1;

        debug!("store"; "{} -> {}", id, path.display());
        self.assets.insert(
            id,
            StoredAsset {
                path,
                mime: mime.into(),
                url,
            },
        );
        id
    }

    pub fn get(&self, id: AssetId) -> Result<&StoredAsset, StoreError> {
        self.assets.get(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn uploads(&self) -> &UploadsConfig {
        &self.uploads
    }

    /// Files under the upload root are served below the base URL;
    /// anything else is served by file name.
    fn url_for(&self, path: &Path) -> String {
        let relative = match self.upload_dir() {
            Ok(root) if path.starts_with(&root) => relative_to(path, &root),
            _ => path.file_name().map(PathBuf::from).unwrap_or_default(),
        };
        self.uploads.url_for(&relative)
    }
}

impl AssetStore for MemoryAssetStore {
    fn mime_type(&self, id: AssetId) -> Option<&str> {
        self.assets.get(&id).map(|asset| asset.mime.as_str())
    }

    fn attached_file(&self, id: AssetId) -> Option<PathBuf> {
        self.assets.get(&id).map(|asset| asset.path.clone())
    }

    fn attachment_url(&self, id: AssetId) -> Option<String> {
        self.assets.get(&id).map(|asset| asset.url.clone())
    }

    fn upload_dir(&self) -> Result<PathBuf, StoreError> {
        let root = &self.uploads.root;
        let root = fs::canonicalize(root).map_err(|err| StoreError::UploadDir(root.clone(), err))?;
        if !root.is_dir() {
            return Err(StoreError::UploadDir(
                root,
                std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }
        Ok(root)
    }
}
