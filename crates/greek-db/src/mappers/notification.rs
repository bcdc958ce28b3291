//! Notification entity <-> model mapper

use greek_core::entities::{Notification, NotificationKind};
use greek_core::error::DomainError;

use crate::models::NotificationModel;

/// Fallible: the stored kind must be a known value
impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let kind = NotificationKind::parse(&model.kind).ok_or_else(|| {
            DomainError::InternalError(format!("unknown notification kind: {}", model.kind))
        })?;

        Ok(Notification {
            id: model.id,
            profile_id: model.profile_id,
            kind,
            title: model.title,
            body: model.body,
            data: model.data,
            read: model.read,
            created_at: model.created_at,
        })
    }
}
