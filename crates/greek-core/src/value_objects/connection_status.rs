//! Connection status - the relationship between two profiles as seen by one of them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship between the viewing profile and another profile
///
/// Evaluated in priority order: an existing connection always wins over
/// any stale pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    PendingSent,
    PendingReceived,
    None,
}

impl ConnectionStatus {
    /// String form used in API responses
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::PendingSent => "pending_sent",
            Self::PendingReceived => "pending_received",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
