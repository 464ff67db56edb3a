use crate::domain::value_objects::{BucketName, ContentType, ObjectKey};

/// Header name under which the canned ACL travels
pub const ACL_HEADER: &str = "x-amz-acl";

/// Canned access-control list applied to an uploaded object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    PublicRead,
}

impl ObjectAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectAcl::PublicRead => "public-read",
        }
    }
}

impl std::fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information about an object after a successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedObject {
    pub key: ObjectKey,
    pub size: u64,
    pub content_type: ContentType,
    pub etag: Option<String>,
}

/// Outcome of a complete deployment, objects listed in upload order
#[derive(Debug, Clone)]
pub struct UploadReport {
    pub bucket: BucketName,
    pub objects: Vec<UploadedObject>,
}

impl UploadReport {
    pub fn new(bucket: BucketName) -> Self {
        Self {
            bucket,
            objects: Vec::new(),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.objects.iter().map(|o| o.size).sum()
    }

    pub fn find(&self, key: &str) -> Option<&UploadedObject> {
        self.objects.iter().find(|o| o.key.as_str() == key)
    }
}
