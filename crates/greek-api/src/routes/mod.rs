//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, connections, conversations, feed, health, notifications, profiles};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(connection_routes())
        .merge(conversation_routes())
        .merge(feed_routes())
        .merge(notification_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/@me", get(profiles::get_current_profile))
        .route("/profiles/@me", patch(profiles::update_current_profile))
        .route("/profiles/@me/settings", patch(profiles::update_settings))
        .route("/profiles/search", get(profiles::search_profiles))
        .route("/profiles/:profile_id", get(profiles::get_profile))
        .route(
            "/profiles/:profile_id/connection-status",
            get(profiles::get_connection_status),
        )
}

/// Connection graph routes
fn connection_routes() -> Router<AppState> {
    Router::new()
        .route("/connections", get(connections::list_connections))
        .route("/connections/requests", post(connections::send_request))
        .route("/connections/requests", get(connections::list_pending_requests))
        .route(
            "/connections/requests/:request_id/respond",
            post(connections::respond_to_request),
        )
}

/// Direct messaging routes
fn conversation_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(conversations::list_conversations))
        .route("/conversations/:partner_id", get(conversations::get_thread))
        .route(
            "/conversations/:partner_id/messages",
            post(conversations::send_message),
        )
}

/// Feed routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(feed::list_feed))
        .route("/posts", post(feed::create_post))
        .route("/posts/:post_id/like", post(feed::toggle_like))
        .route("/posts/:post_id/comments", post(feed::add_comment))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
        .route("/notifications/read-all", post(notifications::mark_all_read))
}
