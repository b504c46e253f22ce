// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Numeric id assigned by the external OAuth provider at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OauthId(pub i64);

impl OauthId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("oauth id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<OauthId> for i64 {
    fn from(value: OauthId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MAX_LENGTH: usize = 39;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at most {} characters long",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short tagline shown on the profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motto(String);

impl Motto {
    pub const MAX_LENGTH: usize = 40;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "motto must be at most {} characters long",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Motto> for String {
    fn from(value: Motto) -> Self {
        value.0
    }
}

impl fmt::Display for Motto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_rejects_non_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-3).is_err());
        assert!(UserId::new(1).is_ok());
    }

    #[test]
    fn username_rejects_blank() {
        assert!(Username::new("   ").is_err());
        assert!(Username::new("").is_err());
    }

    #[test]
    fn username_rejects_overlong() {
        let long = "a".repeat(Username::MAX_LENGTH + 1);
        assert!(Username::new(long).is_err());
    }

    #[test]
    fn motto_accepts_empty_but_bounds_length() {
        assert!(Motto::new("").is_ok());
        assert!(Motto::new("ship it").is_ok());
        assert!(Motto::new("x".repeat(Motto::MAX_LENGTH + 1)).is_err());
    }
}
