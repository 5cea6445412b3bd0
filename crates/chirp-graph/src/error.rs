use thiserror::Error;

/// Errors produced by follow-graph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("an identity cannot follow or unfollow itself")]
    SelfReference,

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
