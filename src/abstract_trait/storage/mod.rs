use crate::{domain::requests::UploadedFile, errors::StorageError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileStorage = Arc<dyn FileStorageTrait + Send + Sync>;

/// The asset store: accepts a binary file, returns a publicly resolvable URL.
#[async_trait]
pub trait FileStorageTrait {
    async fn upload_file(&self, file: &UploadedFile) -> Result<String, StorageError>;
}
