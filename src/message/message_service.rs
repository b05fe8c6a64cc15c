use crate::conversation::conversation_repository::ConversationRepository;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::message::message_dto::SendMessageRequest;
use crate::message::message_models::Message;
use crate::message::message_repository::MessageRepository;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageService {
    db: DbPool,
    messages: MessageRepository,
    conversations: ConversationRepository,
}

impl MessageService {
    pub fn new(
        db: DbPool,
        messages: MessageRepository,
        conversations: ConversationRepository,
    ) -> Self {
        Self {
            db,
            messages,
            conversations,
        }
    }

    pub async fn send_message(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        payload: SendMessageRequest,
    ) -> Result<Message> {
        if sender_id == receiver_id {
            return Err(AppError::Validation(
                "Cannot send a message to yourself".to_string(),
            ));
        }

        let body = normalize_text(payload.text);
        let attachment = payload.attachment;

        if body.is_none() && attachment.is_none() {
            return Err(AppError::Validation(
                "Message text or file is required".to_string(),
            ));
        }

        let conversation = self.conversations.find_or_create(sender_id, receiver_id).await?;

        let message = self
            .messages
            .create(
                conversation.id,
                sender_id,
                receiver_id,
                body.as_deref(),
                attachment.as_ref().map(|a| a.file_url.as_str()),
                attachment.as_ref().map(|a| a.file_type.as_str()),
                attachment.as_ref().map(|a| a.file_name.as_str()),
            )
            .await?;

        self.conversations.touch(conversation.id).await?;

        Ok(message)
    }

    /// Ordered message history with `counterpart_id`, empty when the pair has
    /// never talked. Fetching flips the requester's unseen messages to seen;
    /// the returned snapshot still shows the pre-flip flags.
    pub async fn get_conversation(
        &self,
        requester_id: Uuid,
        counterpart_id: Uuid,
    ) -> Result<Vec<Message>> {
        let Some(conversation) = self
            .conversations
            .find_by_pair(requester_id, counterpart_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        let messages = self.messages.find_by_conversation(conversation.id).await?;

        let flipped = self
            .messages
            .mark_conversation_seen(conversation.id, requester_id)
            .await?;
        tracing::debug!(
            conversation_id = %conversation.id,
            flipped,
            "marked messages seen"
        );

        Ok(messages)
    }

    /// Deletes the conversation with `counterpart_id` and all its messages.
    /// Returns false when there was nothing to delete, which is not an error.
    pub async fn clear_conversation(
        &self,
        requester_id: Uuid,
        counterpart_id: Uuid,
    ) -> Result<bool> {
        let Some(conversation) = self
            .conversations
            .find_by_pair(requester_id, counterpart_id)
            .await?
        else {
            return Ok(false);
        };

        let mut tx = self.db.begin().await?;
        let removed = self
            .messages
            .delete_by_conversation_with_tx(&mut tx, conversation.id)
            .await?;
        self.conversations
            .delete_with_tx(&mut tx, conversation.id)
            .await?;
        tx.commit().await?;

        tracing::debug!(
            conversation_id = %conversation.id,
            removed,
            "conversation cleared"
        );

        Ok(true)
    }

    /// Deletes the requester-owned subset of `message_ids` and returns how
    /// many were actually removed. Ids owned by someone else are silently
    /// skipped; 0 deleted is a success, not an error.
    pub async fn delete_selected(&self, requester_id: Uuid, message_ids: &[Uuid]) -> Result<u64> {
        if message_ids.is_empty() {
            return Err(AppError::Validation(
                "messageIds array is required".to_string(),
            ));
        }

        self.messages.delete_owned(requester_id, message_ids).await
    }
}

/// Trims the optional text payload; whitespace-only input counts as absent.
pub fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_trims_whitespace() {
        assert_eq!(normalize_text(Some("  hi  ".to_string())), Some("hi".to_string()));
    }

    #[test]
    fn normalize_text_treats_empty_as_absent() {
        assert_eq!(normalize_text(Some(String::new())), None);
        assert_eq!(normalize_text(Some("   ".to_string())), None);
        assert_eq!(normalize_text(None), None);
    }
}
