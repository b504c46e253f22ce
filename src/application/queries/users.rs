// src/application/queries/users.rs
use crate::{
    application::{
        dto::{UserResponseDto, UserSearchDto},
        error::{ApplicationError, ApplicationResult},
        ports::RandomSourcePort,
    },
    domain::{
        like::LikeRepository,
        user::{OauthId, User, UserId, UserRepository, Username},
    },
};
use std::sync::Arc;

/// How many random users a single recommendation request returns.
const RECOMMENDED_USER_COUNT: usize = 3;

/// Lowest id ever assigned; recommendation draws start here.
const USER_START_ID: i64 = 1;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    like_repo: Arc<dyn LikeRepository>,
    random: Arc<RandomSourcePort>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        like_repo: Arc<dyn LikeRepository>,
        random: Arc<RandomSourcePort>,
    ) -> Self {
        Self {
            user_repo,
            like_repo,
            random,
        }
    }

    /// Profile of the given user with no viewer-relative like information.
    pub async fn get_profile(&self, user_id: i64) -> ApplicationResult<UserResponseDto> {
        let user = self.require_user(UserId::new(user_id)?).await?;
        Ok(user.into())
    }

    /// Profile as seen by `viewer`: carries whether the viewer likes this
    /// user and how many likes the user has received in total.
    pub async fn get_profile_by_username(
        &self,
        username: impl Into<String>,
        viewer: UserId,
    ) -> ApplicationResult<UserResponseDto> {
        let username = Username::new(username)?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let is_liked = self.like_repo.is_liked(viewer, user.id).await?;
        let total_like = self.like_repo.count_for_target(user.id).await?;

        Ok(UserResponseDto::with_like_info(
            user,
            Some(is_liked),
            Some(total_like),
        ))
    }

    pub async fn get_profile_by_oauth_id(
        &self,
        oauth_id: i64,
    ) -> ApplicationResult<UserResponseDto> {
        let oauth_id = OauthId::new(oauth_id)?;
        let user = self
            .user_repo
            .find_by_oauth_id(oauth_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }

    /// Username substring search. A blank query short-circuits to an empty
    /// result without touching storage.
    pub async fn search_users(&self, query: &str) -> ApplicationResult<Vec<UserSearchDto>> {
        let fragment = query.trim();
        if fragment.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.user_repo.search_by_username(fragment).await?;
        Ok(users
            .into_iter()
            .map(|user| UserSearchDto::from_user(user, false))
            .collect())
    }

    /// Users the viewer has liked, most recent first.
    pub async fn liked_users(&self, viewer: UserId) -> ApplicationResult<Vec<UserResponseDto>> {
        let users = self.like_repo.liked_users(viewer).await?;
        Ok(users
            .into_iter()
            .map(|user| UserResponseDto::with_like_info(user, Some(true), None))
            .collect())
    }

    /// Up to three random distinct users. Drawn ids that no longer resolve
    /// (deleted accounts leave gaps in the id sequence) are skipped rather
    /// than failing the request.
    pub async fn recommend_users(&self, viewer: UserId) -> ApplicationResult<Vec<UserSearchDto>> {
        let Some(max_id) = self.user_repo.max_id().await? else {
            return Ok(Vec::new());
        };

        let ids =
            self.random
                .distinct_ids_in_range(USER_START_ID, max_id.into(), RECOMMENDED_USER_COUNT);

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(user) = self.user_repo.find_by_id(UserId::new(id)?).await? else {
                continue;
            };
            let is_liked = self.like_repo.is_liked(viewer, user.id).await?;
            results.push(UserSearchDto::from_user(user, is_liked));
        }

        Ok(results)
    }

    async fn require_user(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
