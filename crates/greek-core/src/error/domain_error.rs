//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Connection request not found: {0}")]
    RequestNotFound(Uuid),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Cannot target your own profile")]
    InvalidTarget,

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the request recipient can respond")]
    NotRequestRecipient,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Connection request already sent")]
    AlreadyRequested,

    #[error("Profiles are already connected")]
    AlreadyConnected,

    #[error("Connection request already resolved")]
    RequestAlreadyResolved,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Authorization
            Self::NotRequestRecipient => "NOT_REQUEST_RECIPIENT",

            // Conflict
            Self::AlreadyRequested => "ALREADY_REQUESTED",
            Self::AlreadyConnected => "ALREADY_CONNECTED",
            Self::RequestAlreadyResolved => "REQUEST_ALREADY_RESOLVED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::RequestNotFound(_)
                | Self::PostNotFound(_)
                | Self::MessageNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyContent
                | Self::ContentTooLong { .. }
                | Self::InvalidTarget
                | Self::InvalidEmail
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotRequestRecipient)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRequested
                | Self::AlreadyConnected
                | Self::RequestAlreadyResolved
                | Self::EmailAlreadyExists
        )
    }
}
