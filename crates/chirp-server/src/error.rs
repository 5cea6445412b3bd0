use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use chirp_content::ContentError;
use chirp_feed::FeedError;
use chirp_graph::GraphError;
use chirp_identity::IdentityError;
use chirp_sdk::SdkError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("authentication required")]
    Unauthorized,

    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Map the error taxonomy to an HTTP status.
    ///
    /// Validation and self-reference are bad requests, absent resources are
    /// 404, ownership violations are 403 (distinct from 404), duplicate
    /// signup is 409. Idempotent repeats never reach this path — they are
    /// outcomes, not errors.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Sdk(e) => match e {
                SdkError::Type(_) => StatusCode::BAD_REQUEST,
                SdkError::UserNotFound(_) => StatusCode::NOT_FOUND,
                SdkError::Graph(GraphError::SelfReference) => StatusCode::BAD_REQUEST,
                SdkError::Graph(GraphError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
                SdkError::Content(ContentError::EmptyText)
                | SdkError::Content(ContentError::TextTooLong { .. }) => StatusCode::BAD_REQUEST,
                SdkError::Content(ContentError::PostNotFound(_)) => StatusCode::NOT_FOUND,
                SdkError::Content(ContentError::NotPostAuthor) => StatusCode::FORBIDDEN,
                SdkError::Content(ContentError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
                SdkError::Identity(IdentityError::HandleTaken(_)) => StatusCode::CONFLICT,
                SdkError::Identity(IdentityError::NotFound(_)) => StatusCode::NOT_FOUND,
                SdkError::Identity(IdentityError::Backend(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                SdkError::Feed(FeedError::UserNotFound(_)) => StatusCode::NOT_FOUND,
                SdkError::Feed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ServerError::Sdk(SdkError::Content(ContentError::EmptyText));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err = ServerError::Sdk(SdkError::Graph(GraphError::SelfReference));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_is_distinct_from_not_found() {
        let forbidden = ServerError::Sdk(SdkError::Content(ContentError::NotPostAuthor));
        let not_found =
            ServerError::Sdk(SdkError::Content(ContentError::PostNotFound("x".into())));
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_signup_is_conflict() {
        let err = ServerError::Sdk(SdkError::Identity(IdentityError::HandleTaken(
            "alice".into(),
        )));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_actor_is_unauthorized() {
        assert_eq!(ServerError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }
}
