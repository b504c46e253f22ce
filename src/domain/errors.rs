// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by profile, avatar and like-graph rules.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid value: {0}")]
    Validation(String),
    #[error("already taken: {0}")]
    Conflict(String),
    #[error("no such record: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
