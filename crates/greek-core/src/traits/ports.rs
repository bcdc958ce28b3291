//! Infrastructure ports - seams the service layer depends on
//!
//! Implemented over Redis in `greek-cache`; tests substitute in-memory fakes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::events::DomainEvent;

/// Publishes domain events to a member's change-notification channel
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Deliver an event to the given profile's channel
    ///
    /// Delivery is best-effort: callers treat failures as non-fatal.
    async fn publish_to_user(&self, profile_id: Uuid, event: &DomainEvent)
        -> Result<(), DomainError>;
}

/// Stores rotating refresh tokens for authenticated sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a refresh token with a time-to-live in seconds
    async fn store_refresh_token(
        &self,
        profile_id: Uuid,
        token: &str,
        ttl_secs: i64,
    ) -> Result<(), DomainError>;

    /// Consume a refresh token: returns true and removes it if it was valid
    async fn take_refresh_token(&self, profile_id: Uuid, token: &str)
        -> Result<bool, DomainError>;

    /// Revoke every refresh token for a profile
    async fn revoke_all(&self, profile_id: Uuid) -> Result<(), DomainError>;
}
