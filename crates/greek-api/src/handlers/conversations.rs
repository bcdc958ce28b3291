//! Direct messaging handlers
//!
//! Endpoints for the conversation list, message threads, and sending
//! messages. Fetching a thread marks its incoming messages as read.

use axum::{
    extract::{Path, State},
    Json,
};
use greek_service::{
    ConversationResponse, ConversationService, MessageResponse, SendMessageRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the caller's conversations, most recent first
///
/// GET /conversations
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConversationResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service.list_conversations(auth.profile_id).await?;
    Ok(Json(response))
}

/// Get the message thread with a partner
///
/// GET /conversations/:partner_id
pub async fn get_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(partner_id): Path<Uuid>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service.get_thread(auth.profile_id, partner_id).await?;
    Ok(Json(response))
}

/// Send a direct message to a partner
///
/// POST /conversations/:partner_id/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(partner_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service
        .send(auth.profile_id, partner_id, &request.content)
        .await?;
    Ok(Created(Json(response)))
}
