// src/infrastructure/repositories/postgres_user_image.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::image::{FileFeature, NewUserImage, UserImage, UserImageRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const IMAGE_COLUMNS: &str =
    "id, user_id, original_name, content_type, size, url, storage_key, created_at";

#[derive(Clone)]
pub struct PostgresUserImageRepository {
    pool: PgPool,
}

impl PostgresUserImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    user_id: i64,
    original_name: String,
    content_type: String,
    size: i64,
    url: String,
    storage_key: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ImageRow> for UserImage {
    type Error = DomainError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        Ok(UserImage {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            file: FileFeature {
                original_name: row.original_name,
                content_type: row.content_type,
                size: row.size,
                url: row.url,
                storage_key: row.storage_key,
            },
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserImageRepository for PostgresUserImageRepository {
    async fn insert(&self, new_image: NewUserImage) -> DomainResult<UserImage> {
        let NewUserImage {
            user_id,
            file,
            created_at,
        } = new_image;

        let row = sqlx::query_as::<_, ImageRow>(&format!(
            "INSERT INTO user_images (user_id, original_name, content_type, size, url, storage_key, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(i64::from(user_id))
        .bind(&file.original_name)
        .bind(&file.content_type)
        .bind(file.size)
        .bind(&file.url)
        .bind(&file.storage_key)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        UserImage::try_from(row)
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<UserImage>> {
        let row = sqlx::query_as::<_, ImageRow>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM user_images
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        ))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserImage::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM user_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user image not found".into()));
        }

        Ok(())
    }
}
