use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::message_models::Message;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        conversation_id: Uuid,
        sender_id: Uuid,
        receiver_id: Uuid,
        body: Option<&str>,
        file_url: Option<&str>,
        file_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (conversation_id, sender_id, receiver_id, body, file_url, file_type, file_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(conversation_id)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(body)
        .bind(file_url)
        .bind(file_type)
        .bind(file_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Messages of one conversation in creation order, oldest first.
    pub async fn find_by_conversation(&self, conversation_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages
             WHERE conversation_id = $1
             ORDER BY created_at ASC",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Flips every unseen message addressed to `recipient_id` in this
    /// conversation and stamps `seen_at`. Returns how many rows flipped;
    /// running it again right away flips 0.
    pub async fn mark_conversation_seen(
        &self,
        conversation_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE messages
             SET seen = TRUE, seen_at = NOW(), updated_at = NOW()
             WHERE conversation_id = $1 AND receiver_id = $2 AND seen = FALSE",
        )
        .bind(conversation_id)
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Unseen-message counts for `recipient_id`, grouped by sender, limited
    /// to the given sender candidates. Senders with nothing unseen are
    /// absent from the result.
    pub async fn unseen_counts_by_sender(
        &self,
        recipient_id: Uuid,
        sender_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, i64)>> {
        let counts = sqlx::query_as::<_, (Uuid, i64)>(
            "SELECT sender_id, COUNT(*) FROM messages
             WHERE receiver_id = $1 AND sender_id = ANY($2) AND seen = FALSE
             GROUP BY sender_id",
        )
        .bind(recipient_id)
        .bind(sender_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    pub async fn delete_by_conversation_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        conversation_id: Uuid,
    ) -> Result<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE conversation_id = $1")
            .bind(conversation_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the subset of `message_ids` sent by `sender_id`. Ids the user
    /// does not own are filtered out by the predicate, not reported.
    pub async fn delete_owned(&self, sender_id: Uuid, message_ids: &[Uuid]) -> Result<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ANY($1) AND sender_id = $2")
            .bind(message_ids)
            .bind(sender_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
