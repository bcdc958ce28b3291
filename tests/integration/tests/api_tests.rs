//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a member and return the auth payload
async fn register_member(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_member(&server).await;

    assert_eq!(auth.profile.name, request.name);
    assert_eq!(auth.profile.email, request.email);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    // Second registration with same email
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_member(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.profile.name, register_req.name);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token_single_use() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());

    // The consumed token is rejected on reuse
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    // Logout without a body revokes every session
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // The refresh token no longer works
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_member(&server).await;

    let response = server
        .get_auth("/api/v1/profiles/@me", &auth.access_token)
        .await
        .unwrap();
    let profile: CurrentProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, auth.profile.id);
    assert_eq!(profile.name, register_req.name);
}

#[tokio::test]
async fn test_get_current_profile_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/profiles/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    let body = serde_json::json!({
        "university": "State University",
        "chapter": "Alpha Beta Gamma",
        "industry": "Software",
        "bio": "Hello there",
    });
    let response = server
        .patch_auth("/api/v1/profiles/@me", &auth.access_token, &body)
        .await
        .unwrap();
    let profile: CurrentProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.university.as_deref(), Some("State University"));
    assert_eq!(profile.chapter.as_deref(), Some("Alpha Beta Gamma"));
    assert_eq!(profile.bio.as_deref(), Some("Hello there"));
}

#[tokio::test]
async fn test_view_other_profile_hides_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // show_email defaults to false, so Bob never sees Alice's address
    let response = server
        .get_auth(
            &format!("/api/v1/profiles/{}", alice.profile.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, alice.profile.id);
    assert!(profile.email.is_none());
}

#[tokio::test]
async fn test_private_profile_hidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice goes private
    let body = serde_json::json!({ "privacy": { "visibility": "private" } });
    let response = server
        .patch_auth("/api/v1/profiles/@me/settings", &alice.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Bob cannot tell the profile apart from a missing one
    let response = server
        .get_auth(
            &format!("/api/v1/profiles/{}", alice.profile.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND)
        .await
        .unwrap();

    // Alice still sees herself
    let response = server
        .get_auth(
            &format!("/api/v1/profiles/{}", alice.profile.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_search_profiles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Bob finds Alice by name
    let response = server
        .get_auth(
            &format!("/api/v1/profiles/search?q={}", register_req.name),
            &bob.access_token,
        )
        .await
        .unwrap();
    let results: Vec<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().any(|p| p.id == alice.profile.id));

    // Search never returns the caller
    let response = server
        .get_auth("/api/v1/profiles/search", &alice.access_token)
        .await
        .unwrap();
    let results: Vec<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().all(|p| p.id != alice.profile.id));
}

// ============================================================================
// Connection Tests
// ============================================================================

#[tokio::test]
async fn test_connection_request_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice sends a request to Bob
    let body = SendConnectionRequest {
        to_profile: bob.profile.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();
    let sent: SentRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(sent.to_profile, bob.profile.id);
    assert_eq!(sent.status, "pending");

    // Bob sees the pending request
    let response = server
        .get_auth("/api/v1/connections/requests", &bob.access_token)
        .await
        .unwrap();
    let pending: Vec<ConnectionRequestResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].from.id, alice.profile.id);

    // Bob accepts
    let decision = RespondRequest {
        decision: "accept".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/connections/requests/{}/respond", pending[0].id),
            &bob.access_token,
            &decision,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // Both sides list the connection
    for auth in [&alice, &bob] {
        let response = server
            .get_auth("/api/v1/connections", &auth.access_token)
            .await
            .unwrap();
        let connections: Vec<ConnectionResponse> =
            assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(connections.len(), 1);
    }

    // Status reads connected from both directions
    let response = server
        .get_auth(
            &format!(
                "/api/v1/profiles/{}/connection-status",
                bob.profile.id
            ),
            &alice.access_token,
        )
        .await
        .unwrap();
    let status: ConnectionStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.status, "connected");
}

#[tokio::test]
async fn test_duplicate_connection_request_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    let body = SendConnectionRequest {
        to_profile: bob.profile.id.clone(),
    };
    server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_self_connection_request_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;

    let body = SendConnectionRequest {
        to_profile: alice.profile.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_only_recipient_can_respond() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    let body = SendConnectionRequest {
        to_profile: bob.profile.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();
    let sent: SentRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The sender cannot answer their own request
    let decision = RespondRequest {
        decision: "accept".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/connections/requests/{}/respond", sent.id),
            &alice.access_token,
            &decision,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN)
        .await
        .unwrap();
}

// ============================================================================
// Conversation Tests
// ============================================================================

#[tokio::test]
async fn test_message_thread_and_read_state() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice sends Bob two messages
    for text in ["Hey Bob", "Are you going to the mixer?"] {
        let body = SendMessageRequest {
            content: text.to_string(),
        };
        let response = server
            .post_auth(
                &format!("/api/v1/conversations/{}/messages", bob.profile.id),
                &alice.access_token,
                &body,
            )
            .await
            .unwrap();
        let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(message.content, text);
        assert!(!message.read);
    }

    // Bob's conversation list shows 2 unread
    let response = server
        .get_auth("/api/v1/conversations", &bob.access_token)
        .await
        .unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].partner.id, alice.profile.id);
    assert_eq!(conversations[0].unread_count, 2);

    // Opening the thread returns oldest-first and marks everything read
    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}", alice.profile.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let thread: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].content, "Hey Bob");

    let response = server
        .get_auth("/api/v1/conversations", &bob.access_token)
        .await
        .unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(conversations[0].unread_count, 0);
}

#[tokio::test]
async fn test_blank_message_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    let body = SendMessageRequest {
        content: "   ".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/messages", bob.profile.id),
            &alice.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_post_like_comment_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice posts
    let body = CreatePostRequest {
        content: "Rush week starts Monday!".to_string(),
    };
    let response = server
        .post_auth("/api/v1/posts", &alice.access_token, &body)
        .await
        .unwrap();
    let post: FeedPostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.like_count, 0);
    assert!(post.comments.is_empty());

    // Bob likes it
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/like", post.id),
            &bob.access_token,
            &(),
        )
        .await
        .unwrap();
    let like: LikeStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(like.liked);
    assert_eq!(like.like_count, 1);

    // Toggling again removes it
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/like", post.id),
            &bob.access_token,
            &(),
        )
        .await
        .unwrap();
    let like: LikeStateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!like.liked);
    assert_eq!(like.like_count, 0);

    // Bob comments
    let body = AddCommentRequest {
        content: "Count me in".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &bob.access_token,
            &body,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.author.id, bob.profile.id);

    // The feed shows the post with its comment and no remaining likes
    let response = server
        .get_auth("/api/v1/feed", &alice.access_token)
        .await
        .unwrap();
    let feed: Vec<FeedPostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let found = feed.iter().find(|p| p.id == post.id).expect("post in feed");
    assert_eq!(found.comments.len(), 1);
    assert!(found.likes.is_empty());
}

#[tokio::test]
async fn test_like_unknown_post_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/like", uuid::Uuid::new_v4()),
            &alice.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND)
        .await
        .unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_connection_request_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice requests Bob; Bob gets a notification
    let body = SendConnectionRequest {
        to_profile: bob.profile.id.clone(),
    };
    server
        .post_auth("/api/v1/connections/requests", &alice.access_token, &body)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &bob.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 1);

    let response = server
        .get_auth("/api/v1/notifications", &bob.access_token)
        .await
        .unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].read);

    // Mark it read
    let response = server
        .post_auth(
            &format!("/api/v1/notifications/{}/read", notifications[0].id),
            &bob.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &bob.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 0);
}
