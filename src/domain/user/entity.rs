// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Motto, OauthId, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub oauth_id: OauthId,
    pub username: Username,
    pub email: String,
    pub image_url: Option<String>,
    pub introduce: Option<String>,
    pub motto: Option<Motto>,
    pub is_celebrity: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied by `UserRepository::update`. Unset fields are left
/// untouched by the persistence layer.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub motto: Option<Motto>,
    pub introduce: Option<String>,
    pub image_url: Option<String>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            motto: None,
            introduce: None,
            image_url: None,
        }
    }

    pub fn with_motto(mut self, motto: Motto) -> Self {
        self.motto = Some(motto);
        self
    }

    pub fn with_introduce(mut self, introduce: impl Into<String>) -> Self {
        self.introduce = Some(introduce.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
