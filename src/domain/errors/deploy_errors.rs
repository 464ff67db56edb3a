use thiserror::Error;

/// Errors that abort a deployment run.
///
/// Every variant is fatal: the run stops at the first one and nothing is
/// retried.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The site directory is missing its marker file or could not be walked
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// The storage client could not be built or the bucket listing failed
    #[error("storage connection failed: {message}")]
    Connection { message: String },

    /// The target bucket was absent and creating it failed
    #[error("could not create bucket '{bucket}': {message}")]
    BucketCreate { bucket: String, message: String },

    /// Reading a file, deriving its key, or uploading it failed
    #[error("error uploading '{path}': {message}")]
    Upload { path: String, message: String },
}

impl DeployError {
    pub fn validation(message: impl Into<String>) -> Self {
        DeployError::Validation {
            message: message.into(),
        }
    }

    pub fn connection(message: impl ToString) -> Self {
        DeployError::Connection {
            message: message.to_string(),
        }
    }

    pub fn upload(path: impl Into<String>, message: impl ToString) -> Self {
        DeployError::Upload {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for deployment steps
pub type DeployResult<T> = Result<T, DeployError>;
