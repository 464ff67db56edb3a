use thiserror::Error;

/// Errors reported by a storage backend
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Bucket not found: {bucket}")]
    BucketNotFound { bucket: String },

    #[error("Bucket already exists: {bucket}")]
    BucketAlreadyExists { bucket: String },

    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
