use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("handle is empty")]
    EmptyHandle,

    #[error("handle is too long: {len} characters (max {max})")]
    HandleTooLong { len: usize, max: usize },

    #[error("handle contains invalid character: {0:?}")]
    InvalidHandleChar(char),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
