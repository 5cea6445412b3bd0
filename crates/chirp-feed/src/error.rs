use thiserror::Error;

/// Errors produced during feed/profile assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("user not found: @{0}")]
    UserNotFound(String),

    #[error("identity error: {0}")]
    Identity(#[from] chirp_identity::IdentityError),

    #[error("graph error: {0}")]
    Graph(#[from] chirp_graph::GraphError),

    #[error("content error: {0}")]
    Content(#[from] chirp_content::ContentError),
}

pub type FeedResult<T> = Result<T, FeedError>;
