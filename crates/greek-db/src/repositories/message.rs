//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use std::collections::HashMap;

use greek_core::entities::Message;
use greek_core::traits::{ConversationSummary, MessageRepository, RepoResult};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    /// Scan-based aggregation: the latest message per partner and the
    /// unread tally are computed by the store on each call rather than
    /// maintained incrementally.
    #[instrument(skip(self))]
    async fn conversation_summaries(&self, member: Uuid) -> RepoResult<Vec<ConversationSummary>> {
        let latest = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT DISTINCT ON (CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END)
                   id, sender_id, receiver_id, content, read, created_at
            FROM messages
            WHERE sender_id = $1 OR receiver_id = $1
            ORDER BY CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END,
                     created_at DESC
            ",
        )
        .bind(member)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let unread_rows = sqlx::query_as::<_, (Uuid, i64)>(
            r"
            SELECT sender_id, COUNT(*)
            FROM messages
            WHERE receiver_id = $1 AND read = FALSE
            GROUP BY sender_id
            ",
        )
        .bind(member)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;
        let unread: HashMap<Uuid, i64> = unread_rows.into_iter().collect();

        let mut summaries: Vec<ConversationSummary> = latest
            .into_iter()
            .map(Message::from)
            .filter_map(|last_message| {
                let partner = last_message.partner_of(member)?;
                Some(ConversationSummary {
                    partner,
                    unread_count: unread.get(&partner).copied().unwrap_or(0),
                    last_message,
                })
            })
            .collect();
        summaries.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));

        Ok(summaries)
    }

    #[instrument(skip(self))]
    async fn find_thread(&self, member: Uuid, partner: Uuid) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, sender_id, receiver_id, content, read, created_at
            FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC
            ",
        )
        .bind(member)
        .bind(partner)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, sender_id, receiver_id, content, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(message.id)
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(&message.content)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, receiver: Uuid, sender: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET read = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND read = FALSE
            ",
        )
        .bind(receiver)
        .bind(sender)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
