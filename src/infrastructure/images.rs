// src/infrastructure/images.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::image_store::{ImageStore, ImageUpload, StoredImage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores avatar binaries on the local filesystem. Keys are uuid-based file
/// names; the public URL is the configured base joined with the key.
pub struct LocalImageStore {
    root: PathBuf,
    base_url: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn key_for(original_name: &str) -> String {
        match extension_of(original_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        }
    }
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<StoredImage> {
        let key = Self::key_for(&upload.original_name);
        let path = self.root.join(&key);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("create image dir: {err}")))?;
        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("write image: {err}")))?;

        Ok(StoredImage {
            url: format!("{}/{key}", self.base_url),
            key,
            size: upload.data.len() as i64,
        })
    }

    async fn remove(&self, key: &str) -> ApplicationResult<()> {
        let path = self.root.join(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "remove image: {err}"
            ))),
        }
    }
}
