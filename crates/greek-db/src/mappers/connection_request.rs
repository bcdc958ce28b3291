//! Connection request entity <-> model mapper

use greek_core::entities::ConnectionRequest;
use greek_core::error::DomainError;
use greek_core::value_objects::RequestStatus;

use crate::models::ConnectionRequestModel;

/// Fallible: the stored status must be a known value
impl TryFrom<ConnectionRequestModel> for ConnectionRequest {
    type Error = DomainError;

    fn try_from(model: ConnectionRequestModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<RequestStatus>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(ConnectionRequest {
            id: model.id,
            from_profile: model.from_profile,
            to_profile: model.to_profile,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
