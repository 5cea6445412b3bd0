use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use chirp_content::PostDetail;
use chirp_feed::{FeedItem, FollowPeer, ProfileView};
use chirp_identity::Identity;
use chirp_sdk::{LikeToggle, SdkError, UnlikeToggle};
use chirp_types::{Handle, PostId, UserId};

use crate::auth::Credentials;
use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub handle: String,
    pub email: String,
    pub credential_hash: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub text: String,
}

/// Resolve the acting identity, or reject with 401.
async fn require_actor(state: &AppState, headers: &HeaderMap) -> ServerResult<UserId> {
    let credentials = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| Credentials::Bearer(token.to_string()))
        .unwrap_or(Credentials::Anonymous);

    state
        .auth
        .authenticate(&credentials)
        .await?
        .ok_or(ServerError::Unauthorized)
}

fn parse_handle(raw: &str) -> ServerResult<Handle> {
    Handle::parse(raw).map_err(|e| ServerError::Sdk(SdkError::Type(e)))
}

fn parse_post_id(raw: &str) -> ServerResult<PostId> {
    PostId::parse(raw).map_err(|e| ServerError::Sdk(SdkError::Type(e)))
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ServerResult<(StatusCode, Json<Identity>)> {
    let identity = state
        .app
        .signup(&req.handle, &req.email, &req.credential_hash)?;
    Ok((StatusCode::CREATED, Json(identity)))
}

pub async fn profile_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<ProfileView>> {
    let viewer = require_actor(&state, &headers).await?;
    let subject = parse_handle(&handle)?;
    Ok(Json(state.app.profile(&viewer, &subject)?))
}

pub async fn follow_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<Value>> {
    let actor = require_actor(&state, &headers).await?;
    let target = parse_handle(&handle)?;
    let outcome = state.app.follow(&actor, &target)?;
    Ok(Json(json!({ "outcome": outcome })))
}

pub async fn unfollow_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<Value>> {
    let actor = require_actor(&state, &headers).await?;
    let target = parse_handle(&handle)?;
    let outcome = state.app.unfollow(&actor, &target)?;
    Ok(Json(json!({ "outcome": outcome })))
}

pub async fn following_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<FollowPeer>>> {
    require_actor(&state, &headers).await?;
    let subject = parse_handle(&handle)?;
    Ok(Json(state.app.following_list(&subject)?))
}

pub async fn followers_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<FollowPeer>>> {
    require_actor(&state, &headers).await?;
    let subject = parse_handle(&handle)?;
    Ok(Json(state.app.followers_list(&subject)?))
}

pub async fn create_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreatePostRequest>,
) -> ServerResult<(StatusCode, Json<chirp_content::Post>)> {
    let actor = require_actor(&state, &headers).await?;
    let post = state.app.create_post(&actor, &req.text)?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<PostDetail>> {
    require_actor(&state, &headers).await?;
    let post_id = parse_post_id(&id)?;
    Ok(Json(state.app.post_detail(&post_id)?))
}

pub async fn delete_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    let actor = require_actor(&state, &headers).await?;
    let post_id = parse_post_id(&id)?;
    state.app.delete_post(&actor, &post_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn like_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<LikeToggle>> {
    let actor = require_actor(&state, &headers).await?;
    let post_id = parse_post_id(&id)?;
    Ok(Json(state.app.like(&actor, &post_id)?))
}

pub async fn unlike_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Json<UnlikeToggle>> {
    let actor = require_actor(&state, &headers).await?;
    let post_id = parse_post_id(&id)?;
    Ok(Json(state.app.unlike(&actor, &post_id)?))
}

pub async fn feed_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<FeedItem>>> {
    let viewer = require_actor(&state, &headers).await?;
    Ok(Json(state.app.home_feed(&viewer)?))
}
