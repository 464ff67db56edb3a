use bytes::Bytes;
use tracing::{debug, info};

use crate::{
    adapters::outbound::filesystem::{SiteEntry, SiteWalker},
    domain::{
        errors::{DeployError, DeployResult},
        models::{ObjectAcl, SiteFile, SiteRoot, UploadReport, UploadedObject},
        value_objects::ObjectKey,
    },
    services::{content_sniffer::detect_content_type, session_initializer::StorageSession},
};

/// Uploads every file of a validated site, one at a time.
#[derive(Debug, Clone)]
pub struct DirectoryUploader {
    acl: ObjectAcl,
}

impl Default for DirectoryUploader {
    fn default() -> Self {
        Self {
            acl: ObjectAcl::PublicRead,
        }
    }
}

impl DirectoryUploader {
    /// Uploader that marks every object public-read
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the site and upload each file under its root-relative key.
    ///
    /// Stops at the first failure; objects uploaded before it stay in the
    /// bucket.
    pub async fn upload(
        &self,
        root: &SiteRoot,
        session: &StorageSession,
    ) -> DeployResult<UploadReport> {
        let walker = SiteWalker::new(root.path());
        let mut report = UploadReport::new(session.bucket().clone());

        for entry in walker.files() {
            let entry = entry.map_err(|err| DeployError::upload(root.to_string(), err))?;
            let file = self.prepare_file(&entry).await?;

            let info = session
                .store()
                .put_object(
                    session.bucket(),
                    &file.key,
                    file.data.clone(),
                    &file.content_type,
                    self.acl,
                )
                .await
                .map_err(|err| DeployError::upload(file.key.as_str(), err))?;

            debug!("uploaded {} ({} bytes)", file.key, info.size);
            report.objects.push(UploadedObject {
                key: file.key,
                size: info.size,
                content_type: file.content_type,
                etag: info.etag,
            });
        }

        info!("upload successful, check bucket {}", session.bucket());
        Ok(report)
    }

    /// Read a file and work out its key and content type
    pub async fn prepare_file(&self, entry: &SiteEntry) -> DeployResult<SiteFile> {
        let display_path = entry.relative_path.display().to_string();

        let key = ObjectKey::from_relative_path(&entry.relative_path)
            .map_err(|err| DeployError::upload(display_path.clone(), err))?;

        let data = tokio::fs::read(&entry.path)
            .await
            .map(Bytes::from)
            .map_err(|err| DeployError::upload(display_path, err))?;

        let extension = key.extension();
        let sniffed = detect_content_type(&data);
        debug!(
            "file extension: {} content type: {}",
            extension.unwrap_or(""),
            sniffed
        );
        let content_type = sniffed.with_extension_override(extension);

        Ok(SiteFile {
            key,
            data,
            content_type,
        })
    }
}
