//! Domain events - events emitted when domain state changes
//!
//! These events feed the per-user change-notification channels that live
//! clients subscribe to for re-fetch triggers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    ConnectionRequestCreated(ConnectionRequestCreatedEvent),
    ConnectionAccepted(ConnectionAcceptedEvent),
    MessageCreated(MessageCreatedEvent),
    NotificationCreated(NotificationCreatedEvent),
}

/// A new connection request was sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRequestCreatedEvent {
    pub request_id: Uuid,
    pub from_profile: Uuid,
    pub to_profile: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A connection request was accepted and an edge now exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionAcceptedEvent {
    pub request_id: Uuid,
    pub from_profile: Uuid,
    pub to_profile: Uuid,
    pub accepted_at: DateTime<Utc>,
}

/// A direct message was appended to the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreatedEvent {
    pub message_id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// An in-app notification was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreatedEvent {
    pub notification_id: Uuid,
    pub profile_id: Uuid,
    pub kind: String,
}

impl DomainEvent {
    /// Event type name used on the wire
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ConnectionRequestCreated(_) => "CONNECTION_REQUEST_CREATE",
            Self::ConnectionAccepted(_) => "CONNECTION_ACCEPT",
            Self::MessageCreated(_) => "MESSAGE_CREATE",
            Self::NotificationCreated(_) => "NOTIFICATION_CREATE",
        }
    }
}
