//! Notification service
//!
//! Read-side of in-app notifications; creation happens inside the
//! connection and conversation services.

use tracing::{info, instrument};
use uuid::Uuid;

use greek_core::error::DomainError;

use crate::dto::{NotificationResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

const DEFAULT_LIST_LIMIT: i64 = 50;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the actor's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor: Uuid,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self
            .ctx
            .notification_repo()
            .find_by_profile(actor, limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .await?;

        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Count unread notifications
    #[instrument(skip(self))]
    pub async fn unread_count(&self, actor: Uuid) -> ServiceResult<UnreadCountResponse> {
        let count = self.ctx.notification_repo().unread_count(actor).await?;
        Ok(UnreadCountResponse { count })
    }

    /// Mark one notification read
    #[instrument(skip(self))]
    pub async fn mark_read(&self, actor: Uuid, id: Uuid) -> ServiceResult<()> {
        let found = self.ctx.notification_repo().mark_read(actor, id).await?;
        if !found {
            return Err(DomainError::NotificationNotFound(id).into());
        }
        Ok(())
    }

    /// Mark all of the actor's notifications read
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, actor: Uuid) -> ServiceResult<()> {
        let marked = self.ctx.notification_repo().mark_all_read(actor).await?;
        if marked > 0 {
            info!(profile_id = %actor, marked, "Notifications marked read");
        }
        Ok(())
    }
}
