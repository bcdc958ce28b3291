//! Connection entity <-> model mapper

use greek_core::entities::Connection;
use greek_core::error::DomainError;
use greek_core::value_objects::MemberPair;

use crate::models::ConnectionModel;

/// Fallible: the stored pair must be normalized and distinct
impl TryFrom<ConnectionModel> for Connection {
    type Error = DomainError;

    fn try_from(model: ConnectionModel) -> Result<Self, Self::Error> {
        Ok(Connection {
            id: model.id,
            pair: MemberPair::new(model.profile_a, model.profile_b)?,
            created_at: model.created_at,
        })
    }
}
