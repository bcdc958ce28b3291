//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    AddCommentRequest, CreatePostRequest, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest, RequestDecision, RespondRequest, SearchProfilesRequest,
    SendConnectionRequest, SendMessageRequest, UpdateNotificationPrefsRequest,
    UpdatePrivacyRequest, UpdateProfileRequest, UpdateSettingsRequest,
};
pub use responses::{
    ApiResponse, AuthResponse, CommentResponse, ConnectionRequestResponse, ConnectionResponse,
    ConnectionStatusResponse, ConversationResponse, CurrentProfileResponse, FeedPostResponse,
    HealthChecks, HealthResponse, LikeStateResponse, MessageResponse, NotificationPrefsResponse,
    NotificationResponse, PostLikeResponse, PrivacyResponse, ProfileResponse, ReadinessResponse,
    SentRequestResponse, UnreadCountResponse,
};
