// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by value objects, domain services and repository adapters.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input: blank title/content/slug, nil ids, bad cursors.
    #[error("validation error: {0}")]
    Validation(String),
    /// The slug unique index rejected an insert. Create retries on this.
    #[error("slug conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Store unreachable or returned a row the domain cannot represent.
    #[error("persistence error: {0}")]
    Persistence(String),
}
