pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - entities, value objects and errors
pub use domain::{
    BucketName, ContentType, DeployError, DeployResult, DomainValidationError, ObjectAcl,
    ObjectKey, SiteFile, SiteRoot, StorageError, StorageResult, UploadReport, UploadedObject,
};

// Port types - interfaces for external systems
pub use ports::{BucketOperations, ObjectInfo, ObjectStore};

// Services - the three deployment steps and their composition
pub use services::{
    detect_content_type, DeployService, DirectoryUploader, DirectoryValidator,
    SessionInitializer, StorageSession,
};

// Application factory and configuration
pub use app::{
    create_app_from_env, create_in_memory_app, create_spaces_app, AppBuilder, AppConfig,
    AppDependencies, AppError, StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{
    InMemoryStorageAdapter, SpacesConfig, SpacesStorageAdapter, SPACES_ENDPOINT, SPACES_REGION,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_spaces_app, AppBuilder, BucketName, DeployError,
        DeployService, InMemoryStorageAdapter, ObjectKey, SpacesStorageAdapter, StorageBackend,
        UploadReport,
    };
}
