//! Notification entity - in-app notifications delivered per profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ConnectionRequest,
    ConnectionAccepted,
    NewMessage,
}

impl NotificationKind {
    /// String form matching the database column values
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConnectionRequest => "connection_request",
            Self::ConnectionAccepted => "connection_accepted",
            Self::NewMessage => "new_message",
        }
    }

    /// Parse from the database column value
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "connection_request" => Some(Self::ConnectionRequest),
            "connection_accepted" => Some(Self::ConnectionAccepted),
            "new_message" => Some(Self::NewMessage),
            _ => None,
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread Notification
    pub fn new(
        id: Uuid,
        profile_id: Uuid,
        kind: NotificationKind,
        title: String,
        body: String,
    ) -> Self {
        Self {
            id,
            profile_id,
            kind,
            title,
            body,
            data: None,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Attach structured payload data
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            NotificationKind::ConnectionRequest,
            NotificationKind::ConnectionAccepted,
            NotificationKind::NewMessage,
        ] {
            assert_eq!(NotificationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(NotificationKind::parse("mystery"), None);
    }
}
