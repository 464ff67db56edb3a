use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::domain::errors::StorageError;

/// Error codes the S3 API returns when the credentials are refused
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "Forbidden",
];

/// Convert an `aws-sdk-s3` error into a domain storage error.
///
/// The full error chain is kept in the message; the SDK's own `Display`
/// only prints the outermost layer ("service error").
pub fn from_sdk_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let code = err.code().map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();

    match code.as_deref() {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => StorageError::AccessDenied { message },
        Some("InvalidBucketName") | Some("InvalidArgument") => {
            StorageError::InvalidRequest { message }
        }
        _ => StorageError::Backend { message },
    }
}

/// Convert object_store errors to domain storage errors
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => StorageError::InvalidRequest {
                message: format!("Object not found: {}", path),
            },
            object_store::Error::InvalidPath { source } => StorageError::InvalidRequest {
                message: format!("Invalid object path: {}", source),
            },
            _ => StorageError::Backend {
                message: format!("Object store operation failed: {}", err),
            },
        }
    }
}
