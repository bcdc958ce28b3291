//! Notification handlers
//!
//! Endpoints for listing notifications and marking them read.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use greek_service::{NotificationResponse, NotificationService, UnreadCountResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Query parameters for the notification list
#[derive(Debug, Deserialize, Default)]
pub struct ListNotificationsQuery {
    pub limit: Option<i64>,
}

/// List the caller's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListNotificationsQuery>,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.profile_id, query.limit).await?;
    Ok(Json(response))
}

/// Count unread notifications
///
/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.unread_count(auth.profile_id).await?;
    Ok(Json(response))
}

/// Mark a single notification as read
///
/// POST /notifications/:notification_id/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.profile_id, notification_id).await?;
    Ok(NoContent)
}

/// Mark all of the caller's notifications as read
///
/// POST /notifications/read-all
pub async fn mark_all_read(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_all_read(auth.profile_id).await?;
    Ok(NoContent)
}
