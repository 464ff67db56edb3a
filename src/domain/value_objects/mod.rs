pub mod bucket_name;
pub mod content_type;
pub mod object_key;

pub use bucket_name::BucketName;
pub use content_type::ContentType;
pub use object_key::ObjectKey;
