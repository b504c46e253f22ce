use crate::domain::image::UserImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    pub id: i64,
    pub original_name: String,
    pub content_type: String,
    pub size: i64,
    pub url: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<UserImage> for FileResponseDto {
    fn from(image: UserImage) -> Self {
        Self {
            id: image.id,
            original_name: image.file.original_name,
            content_type: image.file.content_type,
            size: image.file.size,
            url: image.file.url,
            created_at: image.created_at,
        }
    }
}
