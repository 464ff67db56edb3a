use bytes::Bytes;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentType, ObjectKey};

/// Name of the file whose presence marks a directory as a static site
pub const INDEX_FILE: &str = "index.html";

/// Absolute path of a directory that passed validation.
///
/// Only the validator hands these out, so holding one means the tree
/// contains an `index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoot(PathBuf);

impl SiteRoot {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One file of the site, read into memory and ready to upload
#[derive(Debug, Clone)]
pub struct SiteFile {
    pub key: ObjectKey,
    pub data: Bytes,
    pub content_type: ContentType,
}
