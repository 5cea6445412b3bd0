use thiserror::Error;

/// Errors produced by content operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("post text is empty")]
    EmptyText,

    #[error("post text is too long: {len} code points (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("only the author may delete a post")]
    NotPostAuthor,

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type ContentResult<T> = Result<T, ContentError>;
