//! Profile handlers
//!
//! Endpoints for the current profile, public profile lookup, settings,
//! and the member directory search.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use greek_service::{
    ConnectionService, ConnectionStatusResponse, CurrentProfileResponse, ProfileResponse,
    ProfileService, SearchProfilesRequest, UpdateProfileRequest, UpdateSettingsRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated member's own profile
///
/// GET /profiles/@me
pub async fn get_current_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_current(auth.profile_id).await?;
    Ok(Json(response))
}

/// Update the authenticated member's profile
///
/// PATCH /profiles/@me
pub async fn update_current_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_profile(auth.profile_id, request).await?;
    Ok(Json(response))
}

/// Update notification and privacy settings
///
/// PATCH /profiles/@me/settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_settings(auth.profile_id, request).await?;
    Ok(Json(response))
}

/// Search the member directory
///
/// GET /profiles/search
pub async fn search_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(request): Query<SearchProfilesRequest>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.search(auth.profile_id, request).await?;
    Ok(Json(response))
}

/// Get another member's profile
///
/// GET /profiles/:profile_id
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(profile_id): Path<Uuid>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_profile(auth.profile_id, profile_id).await?;
    Ok(Json(response))
}

/// Get the connection status between the caller and another member
///
/// GET /profiles/:profile_id/connection-status
pub async fn get_connection_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(profile_id): Path<Uuid>,
) -> ApiResult<Json<ConnectionStatusResponse>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.connection_status(auth.profile_id, profile_id).await?;
    Ok(Json(response))
}
