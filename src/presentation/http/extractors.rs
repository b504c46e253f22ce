// src/presentation/http/extractors.rs
use crate::domain::user::UserId;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header set by the edge gateway after it has validated the caller's OAuth
/// session. This service trusts the gateway and never sees credentials.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub UserId);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| HttpError::unauthorized("missing X-User-Id header"))?;

        let id = raw
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| HttpError::unauthorized("invalid X-User-Id header"))?;

        Ok(Self(id))
    }
}
