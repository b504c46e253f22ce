use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full profile response. `is_liked` and `total_like` are only present when
/// the lookup was made on behalf of a viewer; omitting them from the JSON
/// keeps viewer-less responses free of misleading defaults.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub oauth_id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    pub is_celebrity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_like: Option<i64>,
}

impl UserResponseDto {
    pub fn with_like_info(user: User, is_liked: Option<bool>, total_like: Option<i64>) -> Self {
        let mut dto = Self::from(user);
        dto.is_liked = is_liked;
        dto.total_like = total_like;
        dto
    }
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            oauth_id: user.oauth_id.into(),
            username: user.username.to_string(),
            email: user.email,
            image_url: user.image_url,
            introduce: user.introduce,
            motto: user.motto.map(|m| m.to_string()),
            is_celebrity: user.is_celebrity,
            is_liked: None,
            total_like: None,
        }
    }
}

/// Compact card used by search results and recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSearchDto {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    pub is_celebrity: bool,
    pub is_liked: bool,
}

impl UserSearchDto {
    pub fn from_user(user: User, is_liked: bool) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            image_url: user.image_url,
            motto: user.motto.map(|m| m.to_string()),
            is_celebrity: user.is_celebrity,
            is_liked,
        }
    }
}
