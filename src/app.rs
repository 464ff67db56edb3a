use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{
        InMemoryStorageAdapter, SpacesConfig, SpacesStorageAdapter, SPACES_REGION,
    },
    domain::{errors::DeployError, value_objects::BucketName},
    ports::storage::{BucketOperations, ObjectStore},
    services::{DeployService, SessionInitializer},
};

/// Environment variable holding the Spaces access key
pub const ENV_ACCESS_KEY: &str = "SPACES_KEY";
/// Environment variable holding the Spaces secret key
pub const ENV_SECRET_KEY: &str = "SPACES_SECRET";
/// Environment variable holding the target bucket name
pub const ENV_BUCKET: &str = "SPACES_BUCKET";

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub bucket: String,
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Keep everything in process memory; nothing leaves the machine
    InMemory,
    /// DigitalOcean Spaces over the S3 API
    Spaces(SpacesConfig),
}

impl StorageBackend {
    /// Region used when the bucket has to be created
    pub fn region(&self) -> &str {
        match self {
            StorageBackend::InMemory => SPACES_REGION,
            StorageBackend::Spaces(config) => &config.region,
        }
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub bucket_operations: Arc<dyn BucketOperations>,
    pub object_store: Arc<dyn ObjectStore>,
}

/// Application builder for dependency injection
#[derive(Default)]
pub struct AppBuilder {
    storage_backend: Option<StorageBackend>,
    bucket: Option<String>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the application with custom settings
    pub fn with_config(self, config: AppConfig) -> Self {
        self.with_storage_backend(config.storage_backend)
            .with_bucket(config.bucket)
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.storage_backend = Some(backend);
        self
    }

    /// Configure the bucket the site is deployed to
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Build the storage adapters for the configured backend.
    ///
    /// Client construction failures are connection errors.
    pub fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        match self.backend() {
            StorageBackend::InMemory => {
                let storage = Arc::new(InMemoryStorageAdapter::new());
                Ok(AppDependencies {
                    bucket_operations: storage.clone(),
                    object_store: storage,
                })
            }
            StorageBackend::Spaces(config) => {
                let storage = SpacesStorageAdapter::from_config(config)
                    .map(Arc::new)
                    .map_err(DeployError::connection)?;
                Ok(AppDependencies {
                    bucket_operations: storage.clone(),
                    object_store: storage,
                })
            }
        }
    }

    /// Build the deploy service over freshly created dependencies
    pub fn build(self) -> Result<DeployService, AppError> {
        let deps = self.build_dependencies()?;
        self.build_with(deps)
    }

    /// Build the deploy service over existing dependencies
    pub fn build_with(self, deps: AppDependencies) -> Result<DeployService, AppError> {
        let bucket = self.bucket.clone().ok_or_else(|| AppError::Configuration {
            message: format!("{} is required", ENV_BUCKET),
        })?;
        let bucket = BucketName::new(bucket).map_err(|err| AppError::Configuration {
            message: err.to_string(),
        })?;

        let initializer = SessionInitializer::new(
            deps.bucket_operations,
            deps.object_store,
            self.backend().region(),
        );

        Ok(DeployService::new(initializer, bucket))
    }

    fn backend(&self) -> &StorageBackend {
        self.storage_backend
            .as_ref()
            .unwrap_or(&StorageBackend::InMemory)
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Deploy(#[from] DeployError),
}

/// Create an application that deploys into process memory
pub fn create_in_memory_app(bucket: impl Into<String>) -> Result<DeployService, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .with_bucket(bucket)
        .build()
}

/// Create a Spaces-backed application
pub fn create_spaces_app(
    access_key: impl Into<String>,
    secret_key: impl Into<String>,
    bucket: impl Into<String>,
) -> Result<DeployService, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::Spaces(SpacesConfig::new(
            access_key, secret_key,
        )))
        .with_bucket(bucket)
        .build()
}

/// Create a Spaces-backed application from environment variables
pub fn create_app_from_env() -> Result<DeployService, AppError> {
    let var = |name: &str| {
        std::env::var(name).map_err(|_| AppError::Configuration {
            message: format!("{} environment variable required", name),
        })
    };

    create_spaces_app(var(ENV_ACCESS_KEY)?, var(ENV_SECRET_KEY)?, var(ENV_BUCKET)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_in_memory_app() {
        let app = create_in_memory_app("my-site").unwrap();
        assert_eq!(app.bucket().as_str(), "my-site");
    }

    #[test]
    fn test_bucket_is_required() {
        let err = AppBuilder::new()
            .with_storage_backend(StorageBackend::InMemory)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_spaces_app_needs_credentials() {
        let err = create_spaces_app("", "", "my-site").err().unwrap();
        assert!(matches!(err, AppError::Deploy(DeployError::Connection { .. })));
    }

    #[tokio::test]
    async fn test_spaces_app_builds_without_network() {
        let app = create_spaces_app("key", "secret", "my-site").unwrap();
        assert_eq!(app.bucket().as_str(), "my-site");
    }
}
