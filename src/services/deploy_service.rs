use std::path::Path;
use tracing::info;

use crate::{
    domain::{errors::DeployResult, models::UploadReport, value_objects::BucketName},
    services::{
        directory_uploader::DirectoryUploader, session_initializer::SessionInitializer,
        site_validator::DirectoryValidator,
    },
};

/// Runs a deployment: validate the directory, prepare the bucket, upload.
///
/// Validation finishes before the storage backend is contacted, so an
/// invalid directory never causes network traffic.
#[derive(Clone)]
pub struct DeployService {
    validator: DirectoryValidator,
    initializer: SessionInitializer,
    uploader: DirectoryUploader,
    bucket: BucketName,
}

impl DeployService {
    pub fn new(initializer: SessionInitializer, bucket: BucketName) -> Self {
        Self {
            validator: DirectoryValidator::new(),
            initializer,
            uploader: DirectoryUploader::new(),
            bucket,
        }
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub async fn deploy(&self, root: &Path) -> DeployResult<UploadReport> {
        let site = self.validator.validate(root)?;
        info!("deploying {} to bucket {}", site, self.bucket);

        let session = self.initializer.initialize(self.bucket.clone()).await?;
        self.uploader.upload(&site, &session).await
    }
}
