// src/infrastructure/repositories/postgres_like.rs
use super::map_sqlx;
use super::postgres_user::UserRow;
use crate::domain::errors::DomainResult;
use crate::domain::like::LikeRepository;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn is_liked(&self, source: UserId, target: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE source_id = $1 AND target_id = $2)",
        )
        .bind(i64::from(source))
        .bind(i64::from(target))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count_for_target(&self, target: UserId) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM likes WHERE target_id = $1")
            .bind(i64::from(target))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn liked_users(&self, source: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.oauth_id, u.username, u.email, u.image_url, u.introduce,
                    u.motto, u.is_celebrity, u.created_at
             FROM likes l
             JOIN users u ON u.id = l.target_id
             WHERE l.source_id = $1
             ORDER BY l.created_at DESC",
        )
        .bind(i64::from(source))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
