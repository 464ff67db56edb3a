use async_trait::async_trait;
use aws_sdk_s3::{
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration, ObjectCannedAcl},
    Client,
};
use bytes::Bytes;
use tracing::debug;

use super::{create_spaces_client, SpacesConfig};
use crate::{
    adapters::outbound::storage::error::from_sdk_error,
    domain::{
        errors::StorageResult,
        models::ObjectAcl,
        value_objects::{BucketName, ContentType, ObjectKey},
    },
    ports::storage::{BucketOperations, ObjectInfo, ObjectStore},
};

/// Region in which S3 expects no location constraint on bucket creation
const DEFAULT_S3_REGION: &str = "us-east-1";

/// Spaces storage adapter that implements the storage ports
#[derive(Clone, Debug)]
pub struct SpacesStorageAdapter {
    client: Client,
}

impl SpacesStorageAdapter {
    /// Wrap an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the client from configuration and wrap it
    pub fn from_config(config: &SpacesConfig) -> StorageResult<Self> {
        debug!(endpoint = %config.endpoint, region = %config.region, "creating Spaces client");
        create_spaces_client(config).map(Self::new)
    }
}

#[async_trait]
impl BucketOperations for SpacesStorageAdapter {
    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(str::to_string))
            .collect())
    }

    async fn create_bucket(&self, name: &BucketName, region: &str) -> StorageResult<()> {
        let mut request = self.client.create_bucket().bucket(name.as_str());

        if region != DEFAULT_S3_REGION {
            let configuration = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build();
            request = request.create_bucket_configuration(configuration);
        }

        request.send().await.map_err(from_sdk_error)?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for SpacesStorageAdapter {
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &ContentType,
        acl: ObjectAcl,
    ) -> StorageResult<ObjectInfo> {
        let size = data.len() as u64;

        let output = self
            .client
            .put_object()
            .bucket(bucket.as_str())
            .key(key.as_str())
            .content_type(content_type.as_str())
            .content_length(size as i64)
            .acl(ObjectCannedAcl::from(acl.as_str()))
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(ObjectInfo {
            key: key.clone(),
            size,
            etag: output.e_tag().map(str::to_string),
        })
    }
}
