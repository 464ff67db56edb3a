use std::path::{Component, Path};

use crate::domain::errors::ValidationError;

const MAX_KEY_LENGTH: usize = 1024;

/// A validated object key (path) in the bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_LENGTH {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_LENGTH,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::InvalidObjectKeyCharacter('\0'));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        Ok(Self(value))
    }

    /// Build a key from a path relative to the site root.
    ///
    /// Components are joined with `/` whatever the platform separator is.
    pub fn from_relative_path(path: &Path) -> Result<Self, ValidationError> {
        let mut parts = Vec::new();
        for component in path.components() {
            if let Component::Normal(part) = component {
                let part = part
                    .to_str()
                    .ok_or_else(|| ValidationError::NonUnicodePath(path.display().to_string()))?;
                parts.push(part);
            }
        }
        Self::new(parts.join("/"))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the file name part of the key (everything after the last '/')
    pub fn file_name(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }

    /// The suffix of the file name starting at its last '.', dot included.
    ///
    /// `style.css` gives `.css`, `.css` gives `.css`, `Makefile` gives `None`.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        name.rfind('.').map(|idx| &name[idx..])
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_object_key() {
        assert!(ObjectKey::new("index.html".to_string()).is_ok());
        assert!(ObjectKey::new("css/site.css".to_string()).is_ok());
        assert!(ObjectKey::new("assets/img/deep/logo.png".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_object_key() {
        assert!(ObjectKey::new("".to_string()).is_err());
        assert!(ObjectKey::new("/leading-slash".to_string()).is_err());
        assert!(ObjectKey::new("double//slash".to_string()).is_err());
        assert!(ObjectKey::new("null\0byte".to_string()).is_err());
        assert!(ObjectKey::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_key_from_relative_path_uses_forward_slashes() {
        let path: PathBuf = ["assets", "js", "app.js"].iter().collect();
        let key = ObjectKey::from_relative_path(&path).unwrap();
        assert_eq!(key.as_str(), "assets/js/app.js");

        let key = ObjectKey::from_relative_path(Path::new("index.html")).unwrap();
        assert_eq!(key.as_str(), "index.html");

        assert_eq!(
            ObjectKey::from_relative_path(Path::new("")),
            Err(ValidationError::EmptyObjectKey)
        );
    }

    #[test]
    fn test_extension() {
        let ext = |s: &str| {
            ObjectKey::new(s.to_string())
                .unwrap()
                .extension()
                .map(str::to_string)
        };

        assert_eq!(ext("style.css"), Some(".css".to_string()));
        assert_eq!(ext("js/app.min.js"), Some(".js".to_string()));
        assert_eq!(ext("static/.css"), Some(".css".to_string()));
        assert_eq!(ext("v1.2/Makefile"), None);
        assert_eq!(ext("README"), None);
    }
}
