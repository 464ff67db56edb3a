use crate::domain::errors::ValidationError;

/// Name of the target bucket (a Space).
///
/// Naming rules beyond "present and free of whitespace" are left to the
/// storage service, which rejects bad names at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::BucketNameContainsWhitespace);
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
