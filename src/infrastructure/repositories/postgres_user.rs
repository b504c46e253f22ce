// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Motto, OauthId, User, UserId, UserRepository, UserUpdate, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, oauth_id, username, email, image_url, introduce, motto, is_celebrity, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(
        id: UserId,
        motto: Option<Motto>,
        introduce: Option<String>,
        image_url: Option<String>,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut first = true;

        if let Some(motto) = motto {
            first = false;
            builder.push("motto = ");
            let value: String = motto.into();
            builder.push_bind(value);
        }

        if let Some(introduce) = introduce {
            if !first {
                builder.push(", ");
            }
            first = false;
            builder.push("introduce = ");
            builder.push_bind(introduce);
        }

        if let Some(image_url) = image_url {
            if !first {
                builder.push(", ");
            }
            builder.push("image_url = ");
            builder.push_bind(image_url);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));

        builder
    }

    /// `%`, `_` and `\` in the fragment are literal characters to the
    /// caller, so escape them before wrapping in wildcards.
    fn like_pattern(fragment: &str) -> String {
        let escaped = fragment
            .trim()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{escaped}%")
    }
}

#[derive(Debug, FromRow)]
pub(super) struct UserRow {
    pub id: i64,
    pub oauth_id: i64,
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub introduce: Option<String>,
    pub motto: Option<String>,
    pub is_celebrity: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            oauth_id: OauthId::new(row.oauth_id)?,
            username: Username::new(row.username)?,
            email: row.email,
            image_url: row.image_url,
            introduce: row.introduce,
            motto: row.motto.map(Motto::new).transpose()?,
            is_celebrity: row.is_celebrity,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_oauth_id(&self, oauth_id: OauthId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE oauth_id = $1"
        ))
        .bind(i64::from(oauth_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username ILIKE $1 ORDER BY username"
        ))
        .bind(Self::like_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn max_id(&self) -> DomainResult<Option<UserId>> {
        let max = sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(id) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        max.map(UserId::new).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            motto,
            introduce,
            image_url,
        } = update;

        if motto.is_none() && introduce.is_none() && image_url.is_none() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = Self::build_update_query(id, motto, introduce, image_url);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
