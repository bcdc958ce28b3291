//! Feed handlers
//!
//! Endpoints for the community feed: posts, likes, and comments.

use axum::{
    extract::{Path, State},
    Json,
};
use greek_service::{
    AddCommentRequest, CommentResponse, CreatePostRequest, FeedPostResponse, FeedService,
    LikeStateResponse,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the feed, newest posts first
///
/// GET /feed
pub async fn list_feed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FeedPostResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_feed(auth.profile_id).await?;
    Ok(Json(response))
}

/// Create a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<FeedPostResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.create_post(auth.profile_id, &request.content).await?;
    Ok(Created(Json(response)))
}

/// Toggle the caller's like on a post
///
/// POST /posts/:post_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Json<LikeStateResponse>> {
    let service = FeedService::new(state.service_context());
    let response = service.toggle_like(auth.profile_id, post_id).await?;
    Ok(Json(response))
}

/// Add a comment to a post
///
/// POST /posts/:post_id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service
        .add_comment(auth.profile_id, post_id, &request.content)
        .await?;
    Ok(Created(Json(response)))
}
