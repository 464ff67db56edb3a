use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::StorageResult,
    models::ObjectAcl,
    value_objects::{BucketName, ContentType, ObjectKey},
};

/// Port for writing objects into a bucket.
/// This abstracts the actual storage backend (Spaces, in-memory, ...)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data under `key`, replacing any existing object
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &ContentType,
        acl: ObjectAcl,
    ) -> StorageResult<ObjectInfo>;
}

/// Information returned by the backend for a stored object
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    pub key: ObjectKey,
    pub size: u64,
    pub etag: Option<String>,
}
