use crate::errors::{repository::RepositoryError, storage::StorageError};
use thiserror::Error;

/// Failure taxonomy for product services. Validation failures carry the
/// message for the first failing field; later checks never run.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}
