use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{User, UserUpdate},
    value_objects::{OauthId, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_oauth_id(&self, oauth_id: OauthId) -> DomainResult<Option<User>>;

    /// Case-insensitive substring match over usernames.
    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>>;

    /// Highest assigned user id, `None` when the table is empty.
    async fn max_id(&self) -> DomainResult<Option<UserId>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
}
