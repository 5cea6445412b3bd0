use thiserror::Error;

/// Errors surfaced by the high-level API.
///
/// Mostly a thin union of the per-layer errors; `UserNotFound` is added for
/// handle resolution at the action boundary (following a handle that does
/// not exist, deleting an unknown account).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error("user not found: @{0}")]
    UserNotFound(String),

    #[error(transparent)]
    Type(#[from] chirp_types::TypeError),

    #[error(transparent)]
    Identity(#[from] chirp_identity::IdentityError),

    #[error(transparent)]
    Graph(#[from] chirp_graph::GraphError),

    #[error(transparent)]
    Content(#[from] chirp_content::ContentError),

    #[error(transparent)]
    Feed(#[from] chirp_feed::FeedError),
}

pub type SdkResult<T> = Result<T, SdkError>;
