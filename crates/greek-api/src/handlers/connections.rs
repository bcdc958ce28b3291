//! Connection graph handlers
//!
//! Endpoints for sending, answering, and listing connection requests,
//! and for listing established connections.

use axum::{
    extract::{Path, State},
    Json,
};
use greek_service::{
    ConnectionRequestResponse, ConnectionResponse, ConnectionService, RespondRequest,
    SendConnectionRequest, SentRequestResponse,
};
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's established connections
///
/// GET /connections
pub async fn list_connections(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.list_connections(auth.profile_id).await?;
    Ok(Json(response))
}

/// Send a connection request
///
/// POST /connections/requests
pub async fn send_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<SendConnectionRequest>,
) -> ApiResult<Created<Json<SentRequestResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service
        .send_request(auth.profile_id, request.to_profile)
        .await?;
    Ok(Created(Json(response)))
}

/// List pending incoming connection requests
///
/// GET /connections/requests
pub async fn list_pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConnectionRequestResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.list_pending_incoming(auth.profile_id).await?;
    Ok(Json(response))
}

/// Accept or reject a connection request
///
/// POST /connections/requests/:request_id/respond
pub async fn respond_to_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<Uuid>,
    Json(request): Json<RespondRequest>,
) -> ApiResult<NoContent> {
    let service = ConnectionService::new(state.service_context());
    service
        .respond(auth.profile_id, request_id, request.decision)
        .await?;
    Ok(NoContent)
}
