pub mod bucket_operations;
pub mod object_store;

pub use bucket_operations::BucketOperations;
pub use object_store::{ObjectInfo, ObjectStore};
