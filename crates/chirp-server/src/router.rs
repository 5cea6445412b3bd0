use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use chirp_sdk::Chirp;

use crate::auth::{AuthProvider, HandleTokenAuth};
use crate::handler;

/// Shared state for all handlers: the application facade and the auth seam.
#[derive(Clone)]
pub struct AppState {
    pub app: Chirp,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    /// State with the development auth provider (bearer token = handle).
    pub fn new(app: Chirp) -> Self {
        let auth = Arc::new(HandleTokenAuth::new(app.clone()));
        Self { app, auth }
    }

    /// State with a custom auth provider.
    pub fn with_auth(app: Chirp, auth: Arc<dyn AuthProvider>) -> Self {
        Self { app, auth }
    }
}

/// Build the axum router with all Chirp endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/users", post(handler::signup_handler))
        .route("/v1/users/:handle", get(handler::profile_handler))
        .route(
            "/v1/users/:handle/follow",
            post(handler::follow_handler).delete(handler::unfollow_handler),
        )
        .route(
            "/v1/users/:handle/following",
            get(handler::following_handler),
        )
        .route(
            "/v1/users/:handle/followers",
            get(handler::followers_handler),
        )
        .route("/v1/posts", post(handler::create_post_handler))
        .route(
            "/v1/posts/:id",
            get(handler::post_detail_handler).delete(handler::delete_post_handler),
        )
        .route(
            "/v1/posts/:id/like",
            post(handler::like_handler).delete(handler::unlike_handler),
        )
        .route("/v1/feed", get(handler::feed_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
