// src/domain/image/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Metadata describing a stored avatar binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFeature {
    pub original_name: String,
    pub content_type: String,
    pub size: i64,
    pub url: String,
    /// Key under which the binary lives in the image store.
    pub storage_key: String,
}

#[derive(Debug, Clone)]
pub struct UserImage {
    pub id: i64,
    pub user_id: UserId,
    pub file: FileFeature,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUserImage {
    pub user_id: UserId,
    pub file: FileFeature,
    pub created_at: DateTime<Utc>,
}
