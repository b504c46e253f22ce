#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use rigshare::application::{
    ApplicationResult,
    ports::{
        image_store::{ImageStore, ImageUpload, StoredImage},
        random::RandomSource,
        time::Clock,
    },
    services::ApplicationServices,
};
use rigshare::domain::{
    errors::{DomainError, DomainResult},
    image::{NewUserImage, UserImage, UserImageRepository},
    like::LikeRepository,
    user::{OauthId, User, UserId, UserRepository, UserUpdate, Username},
};
use rigshare::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        oauth_id: OauthId::new(id * 100).unwrap(),
        username: Username::new(username).unwrap(),
        email: format!("{username}@example.com"),
        image_url: None,
        introduce: None,
        motto: None,
        is_celebrity: false,
        created_at: fixed_time(),
    }
}

pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_oauth_id(&self, oauth_id: OauthId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.oauth_id == oauth_id)
            .cloned())
    }

    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| user.username.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn max_id(&self) -> DomainResult<Option<UserId>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .map(|user| user.id)
            .max())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|user| user.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(motto) = update.motto {
            user.motto = Some(motto);
        }
        if let Some(introduce) = update.introduce {
            user.introduce = Some(introduce);
        }
        if let Some(image_url) = update.image_url {
            user.image_url = Some(image_url);
        }

        Ok(user.clone())
    }
}

pub struct InMemoryLikeRepository {
    users: Vec<User>,
    edges: Vec<(i64, i64)>,
}

impl InMemoryLikeRepository {
    pub fn new(users: Vec<User>, edges: Vec<(i64, i64)>) -> Self {
        Self { users, edges }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn is_liked(&self, source: UserId, target: UserId) -> DomainResult<bool> {
        Ok(self
            .edges
            .iter()
            .any(|&(s, t)| s == i64::from(source) && t == i64::from(target)))
    }

    async fn count_for_target(&self, target: UserId) -> DomainResult<i64> {
        Ok(self
            .edges
            .iter()
            .filter(|&&(_, t)| t == i64::from(target))
            .count() as i64)
    }

    async fn liked_users(&self, source: UserId) -> DomainResult<Vec<User>> {
        // Most recent like first: edges are stored in insertion order.
        Ok(self
            .edges
            .iter()
            .rev()
            .filter(|&&(s, _)| s == i64::from(source))
            .filter_map(|&(_, t)| {
                self.users
                    .iter()
                    .find(|user| i64::from(user.id) == t)
                    .cloned()
            })
            .collect())
    }
}

pub struct InMemoryUserImageRepository {
    rows: Mutex<Vec<UserImage>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserImageRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_image(image: UserImage) -> Self {
        let next_id = image.id + 1;
        Self {
            rows: Mutex::new(vec![image]),
            next_id: Mutex::new(next_id),
        }
    }

    pub fn snapshot(&self) -> Vec<UserImage> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserImageRepository for InMemoryUserImageRepository {
    async fn insert(&self, new_image: NewUserImage) -> DomainResult<UserImage> {
        let mut next_id = self.next_id.lock().unwrap();
        let image = UserImage {
            id: *next_id,
            user_id: new_image.user_id,
            file: new_image.file,
            created_at: new_image.created_at,
        };
        *next_id += 1;
        self.rows.lock().unwrap().push(image.clone());
        Ok(image)
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<UserImage>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|image| image.user_id == user_id)
            .max_by_key(|image| image.created_at)
            .cloned())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|image| image.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("user image not found".into()));
        }
        Ok(())
    }
}

pub struct RecordingImageStore {
    stored: Mutex<Vec<StoredImage>>,
    removed: Mutex<Vec<String>>,
    counter: Mutex<u32>,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
            counter: Mutex::new(0),
        }
    }

    pub fn stored(&self) -> Vec<StoredImage> {
        self.stored.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn store(&self, upload: &ImageUpload) -> ApplicationResult<StoredImage> {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        let key = format!("key-{counter}");
        let stored = StoredImage {
            url: format!("http://img.test/{key}"),
            key,
            size: upload.data.len() as i64,
        };
        self.stored.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn remove(&self, key: &str) -> ApplicationResult<()> {
        self.removed.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

/// Random source that replays a preset draw, filtered to the requested range.
pub struct FixedRandomSource(pub Vec<i64>);

impl RandomSource for FixedRandomSource {
    fn distinct_ids_in_range(&self, min: i64, max: i64, count: usize) -> Vec<i64> {
        self.0
            .iter()
            .copied()
            .filter(|id| (min..=max).contains(id))
            .take(count)
            .collect()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Router wired against the in-memory doubles above, for end-to-end
/// request tests without a database.
pub fn make_test_router(users: Vec<User>, edges: Vec<(i64, i64)>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryUserRepository::with_users(users.clone())),
        Arc::new(InMemoryUserImageRepository::new()),
        Arc::new(InMemoryLikeRepository::new(users, edges)),
        Arc::new(RecordingImageStore::new()),
        Arc::new(FixedRandomSource(Vec::new())),
        Arc::new(FixedClock(fixed_time())),
    ));

    let state = HttpState { services };
    build_router(state, &["*".to_string()])
}

/// Assert a JSON error body with the expected status and canonical reason.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body) = resp.into_parts();
    let bytes = axum::body::to_bytes(body, 1024 * 1024)
        .await
        .expect("read body");
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );

    let json: Value = serde_json::from_slice(&bytes).expect("json error body");
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|msg| !msg.is_empty()),
        "expected a non-empty message field"
    );
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
