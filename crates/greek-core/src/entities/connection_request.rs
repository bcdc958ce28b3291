//! Connection request entity - a directional proposal to form a connection

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::RequestStatus;

/// Connection request entity
///
/// Directional: created by `from_profile`, resolved only by `to_profile`.
/// Once the status leaves `Pending` no further transition is permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub id: Uuid,
    pub from_profile: Uuid,
    pub to_profile: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConnectionRequest {
    /// Create a new pending request
    pub fn new(id: Uuid, from_profile: Uuid, to_profile: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            from_profile,
            to_profile,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the request is still awaiting a response
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Transition to `Accepted`
    ///
    /// # Errors
    /// Returns `RequestAlreadyResolved` if the request is already terminal.
    pub fn accept(&mut self) -> Result<(), DomainError> {
        self.transition(RequestStatus::Accepted)
    }

    /// Transition to `Rejected`
    ///
    /// # Errors
    /// Returns `RequestAlreadyResolved` if the request is already terminal.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        self.transition(RequestStatus::Rejected)
    }

    fn transition(&mut self, target: RequestStatus) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::RequestAlreadyResolved);
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }
}
