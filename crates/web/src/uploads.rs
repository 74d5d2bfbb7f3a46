use std::path::{Path, PathBuf};

use axum::body::Bytes;
use uuid::Uuid;

/// An uploaded file exactly as received. Its content is never inspected.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Destination for uploaded images: a directory, or nowhere.
#[derive(Debug, Clone, Default)]
pub struct UploadStore {
    dir: Option<PathBuf>,
}

impl UploadStore {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// A store that drops every upload.
    pub fn discarding() -> Self {
        Self::default()
    }

    /// Write the asset under a fresh random name, keeping a sane extension.
    ///
    /// Returns `Ok(None)` when uploads are discarded.
    pub async fn store(&self, asset: &UploadedAsset) -> std::io::Result<Option<PathBuf>> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };

        tokio::fs::create_dir_all(dir).await?;

        let name = match asset.file_name.as_deref().and_then(safe_extension) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let path = dir.join(name);

        tokio::fs::write(&path, &asset.bytes).await?;

        Ok(Some(path))
    }
}

fn safe_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
}
