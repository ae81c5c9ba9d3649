use crate::{
    abstract_trait::FileStorageTrait, domain::requests::UploadedFile, errors::StorageError,
};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{error, info};
use uuid::Uuid;

/// Local-disk asset store. Files land under the upload directory with a
/// random name and are served back under `<base_url>/uploads/`.
#[derive(Clone)]
pub struct DiskStorage {
    upload_dir: PathBuf,
    base_url: String,
}

impl DiskStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl FileStorageTrait for DiskStorage {
    async fn upload_file(&self, file: &UploadedFile) -> Result<String, StorageError> {
        let extension = file
            .original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .ok_or_else(|| StorageError::InvalidFilename(file.original_name.clone()))?;

        let stored_name = format!("{}.{extension}", Uuid::new_v4());
        let path = self.upload_dir.join(&stored_name);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::write(&path, &file.bytes).await.map_err(|e| {
            error!("❌ Failed to write upload {}: {:?}", path.display(), e);
            e
        })?;

        let url = format!(
            "{}/uploads/{stored_name}",
            self.base_url.trim_end_matches('/')
        );

        info!("✅ Stored upload {} at {}", file.original_name, url);
        Ok(url)
    }
}
