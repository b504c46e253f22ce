use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;

/// Read side of the like graph. Writing likes happens in a different
/// subsystem; this service only ever queries existing edges.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn is_liked(&self, source: UserId, target: UserId) -> DomainResult<bool>;

    async fn count_for_target(&self, target: UserId) -> DomainResult<i64>;

    /// Users the source has liked, most recent like first.
    async fn liked_users(&self, source: UserId) -> DomainResult<Vec<User>>;
}
