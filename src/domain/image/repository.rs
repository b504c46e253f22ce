use crate::domain::errors::DomainResult;
use crate::domain::image::entity::{NewUserImage, UserImage};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserImageRepository: Send + Sync {
    async fn insert(&self, new_image: NewUserImage) -> DomainResult<UserImage>;

    /// Current avatar metadata for a user. At most one row exists per user
    /// because the old row is removed whenever the avatar is swapped.
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<UserImage>>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
