use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::conversation_models::{pair_key, Conversation};

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the conversation for the unordered pair {a, b}, creating it if
    /// none exists. The no-op upsert makes concurrent calls for the same pair
    /// converge on the single existing row instead of erroring.
    pub async fn find_or_create(&self, a: Uuid, b: Uuid) -> Result<Conversation> {
        let (low, high) = pair_key(a, b);

        let conversation = sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations (user_low, user_high)
             VALUES ($1, $2)
             ON CONFLICT (user_low, user_high) DO UPDATE SET user_low = EXCLUDED.user_low
             RETURNING *",
        )
        .bind(low)
        .bind(high)
        .fetch_one(&self.pool)
        .await?;

        Ok(conversation)
    }

    pub async fn find_by_pair(&self, a: Uuid, b: Uuid) -> Result<Option<Conversation>> {
        let (low, high) = pair_key(a, b);

        let conversation = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations WHERE user_low = $1 AND user_high = $2",
        )
        .bind(low)
        .bind(high)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conversation)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Conversation>> {
        let conversations = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations
             WHERE user_low = $1 OR user_high = $1
             ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(conversations)
    }

    /// Refreshes `updated_at`, which orders the chatter directory.
    pub async fn touch(&self, conversation_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE conversations SET updated_at = NOW() WHERE id = $1")
            .bind(conversation_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        conversation_id: Uuid,
    ) -> Result<()> {
        sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(conversation_id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
