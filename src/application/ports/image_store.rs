// src/application/ports/image_store.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Avatar binary received from the HTTP layer.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Location of a stored binary as reported by the image store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub key: String,
    pub url: String,
    pub size: i64,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<StoredImage>;

    /// Remove a previously stored binary. Removing a key that no longer
    /// exists is not an error.
    async fn remove(&self, key: &str) -> ApplicationResult<()>;
}
