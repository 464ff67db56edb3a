use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{
    memory::InMemory, path::Path as ObjectPath, Attribute, AttributeValue, Attributes,
    ObjectStore as ApacheObjectStore, PutOptions, PutPayload,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ObjectAcl, ACL_HEADER},
        value_objects::{BucketName, ContentType, ObjectKey},
    },
    ports::storage::{BucketOperations, ObjectInfo, ObjectStore},
};

/// In-memory storage backed by one `object_store` InMemory store per bucket.
///
/// Used for dry runs and tests. Content type and ACL are kept as object
/// attributes so they can be inspected after an upload.
#[derive(Clone, Default)]
pub struct InMemoryStorageAdapter {
    buckets: Arc<RwLock<BTreeMap<String, Arc<InMemory>>>>,
}

/// An object read back from the in-memory store
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub acl: Option<String>,
}

impl InMemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given buckets already present
    pub fn with_buckets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buckets = names
            .into_iter()
            .map(|name| (name.into(), Arc::new(InMemory::new())))
            .collect();
        Self {
            buckets: Arc::new(RwLock::new(buckets)),
        }
    }

    async fn bucket_store(&self, bucket: &str) -> StorageResult<Arc<InMemory>> {
        self.buckets
            .read()
            .await
            .get(bucket)
            .cloned()
            .ok_or_else(|| StorageError::BucketNotFound {
                bucket: bucket.to_string(),
            })
    }

    /// Read an object back together with its stored attributes
    pub async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject> {
        let store = self.bucket_store(bucket).await?;
        let result = store.get(&ObjectPath::from(key)).await?;

        let content_type = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|value| value.to_string());
        let acl = result
            .attributes
            .get(&Attribute::Metadata(ACL_HEADER.into()))
            .map(|value| value.to_string());
        let data = result.bytes().await?;

        Ok(StoredObject {
            data,
            content_type,
            acl,
        })
    }

    /// Keys of every object in a bucket, sorted
    pub async fn list_keys(&self, bucket: &str) -> StorageResult<Vec<String>> {
        let store = self.bucket_store(bucket).await?;
        let mut keys: Vec<String> = store
            .list(None)
            .map_ok(|meta| meta.location.to_string())
            .try_collect()
            .await?;
        keys.sort();
        Ok(keys)
    }
}

#[async_trait]
impl BucketOperations for InMemoryStorageAdapter {
    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        Ok(self.buckets.read().await.keys().cloned().collect())
    }

    async fn create_bucket(&self, name: &BucketName, region: &str) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;
        if buckets.contains_key(name.as_str()) {
            return Err(StorageError::BucketAlreadyExists {
                bucket: name.to_string(),
            });
        }

        debug!(bucket = %name, region, "creating in-memory bucket");
        buckets.insert(name.to_string(), Arc::new(InMemory::new()));
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for InMemoryStorageAdapter {
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &ContentType,
        acl: ObjectAcl,
    ) -> StorageResult<ObjectInfo> {
        let store = self.bucket_store(bucket.as_str()).await?;
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(content_type.as_str().to_string()),
        );
        attributes.insert(
            Attribute::Metadata(ACL_HEADER.into()),
            AttributeValue::from(acl.as_str()),
        );

        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = store
            .put_opts(&ObjectPath::from(key.as_str()), PutPayload::from(data), options)
            .await?;

        Ok(ObjectInfo {
            key: key.clone(),
            size,
            etag: result.e_tag,
        })
    }
}
