//! DigitalOcean Spaces adapter built on the `aws-sdk-s3` client.
//!
//! Spaces speaks the S3 API, so the stock SDK is pointed at the Spaces
//! endpoint with static credentials.

pub mod spaces_adapter;

pub use spaces_adapter::SpacesStorageAdapter;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

use crate::domain::errors::StorageError;

/// Spaces endpoint every deployment talks to.
/// Not configurable at runtime: one region is served.
pub const SPACES_ENDPOINT: &str = "https://nyc3.digitaloceanspaces.com";

/// Region sent with requests and used when creating a bucket
pub const SPACES_REGION: &str = "us-east-1";

/// Configuration for the Spaces storage backend
#[derive(Clone)]
pub struct SpacesConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
}

impl SpacesConfig {
    /// Configuration for the fixed endpoint and region
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            endpoint: SPACES_ENDPOINT.to_string(),
            region: SPACES_REGION.to_string(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for SpacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpacesConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Create an S3 client for Spaces from configuration.
///
/// No request is sent here; bad credentials surface on the first call.
pub fn create_spaces_client(config: &SpacesConfig) -> Result<aws_sdk_s3::Client, StorageError> {
    if config.access_key.is_empty() || config.secret_key.is_empty() {
        return Err(StorageError::InvalidRequest {
            message: "access key and secret key must not be empty".to_string(),
        });
    }

    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        None,
        None,
        "spaces-env",
    );

    let s3_config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .endpoint_url(&config.endpoint)
        .credentials_provider(credentials)
        .build();

    Ok(aws_sdk_s3::Client::from_conf(s3_config))
}
