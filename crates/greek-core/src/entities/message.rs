//! Message entity - a direct message between two profiles

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Message entity
///
/// Append-only: `read` transitions false -> true exactly once, when the
/// receiver opens the conversation with the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread Message
    pub fn new(id: Uuid, sender_id: Uuid, receiver_id: Uuid, content: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Get the conversation partner for a given participant
    pub fn partner_of(&self, profile_id: Uuid) -> Option<Uuid> {
        if profile_id == self.sender_id {
            Some(self.receiver_id)
        } else if profile_id == self.receiver_id {
            Some(self.sender_id)
        } else {
            None
        }
    }

    /// Check whether this message counts as unread for the given receiver
    #[inline]
    pub fn is_unread_for(&self, profile_id: Uuid) -> bool {
        self.receiver_id == profile_id && !self.read
    }
}
