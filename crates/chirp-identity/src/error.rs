use thiserror::Error;

/// Errors produced by identity operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("handle already taken: @{0}")]
    HandleTaken(String),

    #[error("identity not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type IdentityResult<T> = Result<T, IdentityError>;
