// Infrastructure error conversions
pub mod error;

// Storage implementations
pub mod memory;
pub mod spaces;

// Re-export key types
pub use memory::{InMemoryStorageAdapter, StoredObject};
pub use spaces::{SpacesConfig, SpacesStorageAdapter, SPACES_ENDPOINT, SPACES_REGION};
