use async_trait::async_trait;

use crate::domain::{errors::StorageResult, value_objects::BucketName};

/// Port for account-level bucket management
#[async_trait]
pub trait BucketOperations: Send + Sync + 'static {
    /// List the names of all buckets visible to the credentials
    async fn list_buckets(&self) -> StorageResult<Vec<String>>;

    /// Create a bucket in the given region
    async fn create_bucket(&self, name: &BucketName, region: &str) -> StorageResult<()>;
}
