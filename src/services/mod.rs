pub mod content_sniffer;
pub mod deploy_service;
pub mod directory_uploader;
pub mod session_initializer;
pub mod site_validator;

pub use content_sniffer::detect_content_type;
pub use deploy_service::DeployService;
pub use directory_uploader::DirectoryUploader;
pub use session_initializer::{SessionInitializer, StorageSession};
pub use site_validator::DirectoryValidator;
