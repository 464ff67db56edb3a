#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use spaces_deploy::{
    BucketName, BucketOperations, ContentType, ObjectAcl, ObjectInfo, ObjectKey, ObjectStore,
    StorageError, StorageResult,
};
use std::path::Path;
use std::sync::Mutex;

/// One recorded upload call
#[derive(Debug, Clone)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub size: usize,
    pub content_type: String,
    pub acl: ObjectAcl,
}

/// Storage double that records every call and can be told to fail
#[derive(Default)]
pub struct RecordingStorage {
    pub existing_buckets: Vec<String>,
    pub fail_listing: bool,
    pub fail_create: bool,
    pub fail_put_for: Option<String>,
    pub list_calls: Mutex<usize>,
    pub create_calls: Mutex<Vec<(String, String)>>,
    pub put_calls: Mutex<Vec<PutCall>>,
}

impl RecordingStorage {
    pub fn with_buckets(names: &[&str]) -> Self {
        Self {
            existing_buckets: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn list_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn creates(&self) -> Vec<(String, String)> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn puts(&self) -> Vec<PutCall> {
        self.put_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.list_count() + self.creates().len() + self.puts().len()
    }
}

#[async_trait]
impl BucketOperations for RecordingStorage {
    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        *self.list_calls.lock().unwrap() += 1;
        if self.fail_listing {
            return Err(StorageError::AccessDenied {
                message: "InvalidAccessKeyId".to_string(),
            });
        }
        Ok(self.existing_buckets.clone())
    }

    async fn create_bucket(&self, name: &BucketName, region: &str) -> StorageResult<()> {
        self.create_calls
            .lock()
            .unwrap()
            .push((name.to_string(), region.to_string()));
        if self.fail_create {
            return Err(StorageError::Backend {
                message: "BucketAlreadyExists".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for RecordingStorage {
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &ContentType,
        acl: ObjectAcl,
    ) -> StorageResult<ObjectInfo> {
        self.put_calls.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            size: data.len(),
            content_type: content_type.to_string(),
            acl,
        });

        if self.fail_put_for.as_deref() == Some(key.as_str()) {
            return Err(StorageError::Backend {
                message: "connection reset".to_string(),
            });
        }

        Ok(ObjectInfo {
            key: key.clone(),
            size: data.len() as u64,
            etag: Some(format!("\"etag-{}\"", key)),
        })
    }
}

/// Write `files` (relative path, content) under `root`, creating directories
pub fn write_site(root: &Path, files: &[(&str, &[u8])]) {
    for (path, content) in files {
        let path = root.join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
