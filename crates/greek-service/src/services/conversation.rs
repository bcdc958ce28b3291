//! Conversation service
//!
//! Lists per-partner conversation summaries and handles thread reads
//! and sends.

use tracing::{info, instrument};
use uuid::Uuid;

use greek_core::entities::{Message, Notification, NotificationKind};
use greek_core::error::DomainError;
use greek_core::events::{DomainEvent, MessageCreatedEvent, NotificationCreatedEvent};

use crate::dto::{ConversationResponse, MessageResponse, ProfileResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConversationService<'a> {
    /// Create a new ConversationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List conversation summaries for the actor
    ///
    /// Each partner the actor has exchanged messages with appears once,
    /// with the most recent message and the count of unread messages
    /// addressed to the actor, ordered by most recent message. The
    /// aggregation strategy lives behind the message repository; this
    /// service only decorates the summaries with profile snapshots.
    #[instrument(skip(self))]
    pub async fn list_conversations(&self, actor: Uuid) -> ServiceResult<Vec<ConversationResponse>> {
        let summaries = self.ctx.message_repo().conversation_summaries(actor).await?;

        let mut conversations = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let Some(profile) = self.ctx.profile_repo().find_by_id(summary.partner).await? else {
                continue;
            };

            conversations.push(ConversationResponse {
                partner: ProfileResponse::public_view(&profile),
                last_message: MessageResponse::from(&summary.last_message),
                unread_count: summary.unread_count,
            });
        }

        Ok(conversations)
    }

    /// Get the full thread with a partner, oldest first
    ///
    /// As a side effect, unread messages from the partner to the actor
    /// are marked read. Re-reading an already-read thread writes nothing.
    #[instrument(skip(self))]
    pub async fn get_thread(
        &self,
        actor: Uuid,
        partner: Uuid,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let marked = self.ctx.message_repo().mark_read(actor, partner).await?;
        if marked > 0 {
            info!(reader = %actor, partner = %partner, marked, "Thread marked read");
        }

        let messages = self.ctx.message_repo().find_thread(actor, partner).await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Send a direct message
    #[instrument(skip(self, content))]
    pub async fn send(
        &self,
        actor: Uuid,
        receiver: Uuid,
        content: &str,
    ) -> ServiceResult<MessageResponse> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyContent.into());
        }
        if actor == receiver {
            return Err(DomainError::InvalidTarget.into());
        }

        let receiver_profile = self
            .ctx
            .profile_repo()
            .find_by_id(receiver)
            .await?
            .ok_or(DomainError::ProfileNotFound(receiver))?;

        let message = Message::new(
            self.ctx.generate_id(),
            actor,
            receiver,
            content.to_string(),
        );
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, sender = %actor, receiver = %receiver, "Message sent");

        let event = DomainEvent::MessageCreated(MessageCreatedEvent {
            message_id: message.id,
            sender_id: actor,
            receiver_id: receiver,
            created_at: message.created_at,
        });
        self.ctx
            .publisher()
            .publish_to_user(receiver, &event)
            .await
            .ok();

        if receiver_profile.notifications.message {
            let sender_name = self
                .ctx
                .profile_repo()
                .find_by_id(actor)
                .await
                .ok()
                .flatten()
                .map_or_else(|| "A member".to_string(), |p| p.name);

            let notification = Notification::new(
                self.ctx.generate_id(),
                receiver,
                NotificationKind::NewMessage,
                "New message".to_string(),
                format!("{sender_name} sent you a message"),
            )
            .with_data(serde_json::json!({ "sender_id": actor, "message_id": message.id }));

            if self
                .ctx
                .notification_repo()
                .create(&notification)
                .await
                .is_ok()
            {
                let event = DomainEvent::NotificationCreated(NotificationCreatedEvent {
                    notification_id: notification.id,
                    profile_id: receiver,
                    kind: notification.kind.as_str().to_string(),
                });
                self.ctx
                    .publisher()
                    .publish_to_user(receiver, &event)
                    .await
                    .ok();
            }
        }

        Ok(MessageResponse::from(&message))
    }
}
