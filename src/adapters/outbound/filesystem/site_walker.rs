use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors raised while walking a site directory
#[derive(Debug, Error)]
pub enum SiteWalkError {
    #[error("error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("path {path} is not under the site root")]
    OutsideRoot { path: PathBuf },
}

/// A regular file found under the site root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    /// Full path on disk
    pub path: PathBuf,
    /// Path relative to the site root
    pub relative_path: PathBuf,
}

/// Walks every regular file below a root, in file-name order.
///
/// Directories are descended into but not yielded. Symbolic links are not
/// followed and not yielded.
pub struct SiteWalker {
    root: PathBuf,
}

impl SiteWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Iterate over the files; errors are yielded in place and the caller
    /// decides whether to stop.
    pub fn files(&self) -> impl Iterator<Item = Result<SiteEntry, SiteWalkError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => return Some(Err(SiteWalkError::from(err))),
                };

                let file_type = entry.file_type();
                if file_type.is_dir() {
                    return None;
                }
                if !file_type.is_file() {
                    debug!("skipping non-regular file {}", entry.path().display());
                    return None;
                }

                Some(self.to_site_entry(entry.into_path()))
            })
    }

    fn to_site_entry(&self, path: PathBuf) -> Result<SiteEntry, SiteWalkError> {
        let relative_path = path
            .strip_prefix(&self.root)
            .map_err(|_| SiteWalkError::OutsideRoot { path: path.clone() })?
            .to_path_buf();

        Ok(SiteEntry {
            path,
            relative_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walk_yields_only_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("css/site.css"), "body {}").unwrap();
        fs::write(dir.path().join("about.html"), "<p>about</p>").unwrap();

        let walker = SiteWalker::new(dir.path());
        let relative: Vec<PathBuf> = walker
            .files()
            .map(|entry| entry.unwrap().relative_path)
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("about.html"),
                PathBuf::from("css").join("site.css"),
                PathBuf::from("index.html"),
            ]
        );
    }

    #[test]
    fn test_missing_root_yields_error() {
        let dir = tempfile::tempdir().unwrap();
        let walker = SiteWalker::new(dir.path().join("does-not-exist"));

        let results: Vec<_> = walker.files().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(SiteWalkError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        std::os::unix::fs::symlink(dir.path().join("index.html"), dir.path().join("link.html"))
            .unwrap();

        let walker = SiteWalker::new(dir.path());
        let files: Vec<_> = walker.files().map(|e| e.unwrap().relative_path).collect();
        assert_eq!(files, vec![PathBuf::from("index.html")]);
    }
}
