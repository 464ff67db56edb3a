use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::{DeployError, DeployResult},
        value_objects::BucketName,
    },
    ports::storage::{BucketOperations, ObjectStore},
};

/// A connected storage backend bound to the deployment's bucket.
///
/// Read-only once created; every upload of a run goes through the same
/// session.
#[derive(Clone)]
pub struct StorageSession {
    bucket: BucketName,
    store: Arc<dyn ObjectStore>,
}

impl StorageSession {
    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for StorageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageSession")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

/// Makes sure the target bucket exists and hands out a session for it
#[derive(Clone)]
pub struct SessionInitializer {
    buckets: Arc<dyn BucketOperations>,
    store: Arc<dyn ObjectStore>,
    region: String,
}

impl SessionInitializer {
    pub fn new(
        buckets: Arc<dyn BucketOperations>,
        store: Arc<dyn ObjectStore>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            buckets,
            store,
            region: region.into(),
        }
    }

    /// List the account's buckets and create `bucket` if it is not there.
    ///
    /// A failed listing means the endpoint or the credentials are unusable
    /// and is reported as a connection error.
    pub async fn initialize(&self, bucket: BucketName) -> DeployResult<StorageSession> {
        let existing = self
            .buckets
            .list_buckets()
            .await
            .map_err(DeployError::connection)?;

        if existing.iter().any(|name| name == bucket.as_str()) {
            info!("using existing bucket {}", bucket);
        } else {
            info!("creating bucket {} in {}", bucket, self.region);
            self.buckets
                .create_bucket(&bucket, &self.region)
                .await
                .map_err(|err| DeployError::BucketCreate {
                    bucket: bucket.to_string(),
                    message: err.to_string(),
                })?;
        }

        Ok(StorageSession {
            bucket,
            store: self.store.clone(),
        })
    }
}
