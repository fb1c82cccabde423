// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input breaks an invariant of a value object or entity.
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness rule or an optimistic concurrency check failed.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failure; never caused by the caller.
    #[error("persistence error: {0}")]
    Persistence(String),
}
