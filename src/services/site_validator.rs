use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    adapters::outbound::filesystem::SiteWalker,
    domain::{
        errors::{DeployError, DeployResult},
        models::{SiteRoot, INDEX_FILE},
    },
};

/// Checks that a directory looks like a static site before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct DirectoryValidator;

impl DirectoryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and require a file whose root-relative path is exactly
    /// `index.html`.
    ///
    /// The whole tree is visited and each file is logged. A file named
    /// `index.html` in a subdirectory does not count.
    pub fn validate(&self, root: &Path) -> DeployResult<SiteRoot> {
        if !root.is_dir() {
            return Err(DeployError::validation(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let walker = SiteWalker::new(root);
        let mut found_index = false;

        for entry in walker.files() {
            let entry = entry.map_err(|err| DeployError::validation(err.to_string()))?;
            debug!("filename: {}", entry.relative_path.display());

            if entry.relative_path == Path::new(INDEX_FILE) {
                found_index = true;
            }
        }

        if !found_index {
            return Err(DeployError::validation(format!(
                "directory does not contain an {} file",
                INDEX_FILE
            )));
        }

        Ok(SiteRoot::new(PathBuf::from(root)))
    }
}
