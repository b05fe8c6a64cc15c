use std::collections::HashMap;

use crate::{
    conversation::{conversation_models::Conversation, conversation_repository::ConversationRepository},
    error::Result,
    message::message_repository::MessageRepository,
    user::{
        user_dto::ChatterResponse,
        user_models::{ChatterProfile, UserResponse},
        user_repository::UserRepository,
    },
};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
    conversations: ConversationRepository,
    messages: MessageRepository,
}

impl UserService {
    pub fn new(
        users: UserRepository,
        conversations: ConversationRepository,
        messages: MessageRepository,
    ) -> Self {
        Self {
            users,
            conversations,
            messages,
        }
    }

    pub async fn search_users(&self, requester_id: Uuid, query: &str) -> Result<Vec<UserResponse>> {
        let users = self.users.search(query, requester_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Everyone the user currently has a conversation with, most recently
    /// active first, each entry enriched with the counterpart profile and the
    /// number of their messages the user has not seen yet.
    pub async fn current_chatters(&self, requester_id: Uuid) -> Result<Vec<ChatterResponse>> {
        let conversations = self.conversations.list_for_user(requester_id).await?;
        if conversations.is_empty() {
            return Ok(Vec::new());
        }

        let counterpart_ids: Vec<Uuid> = conversations
            .iter()
            .map(|c| c.counterpart_of(requester_id))
            .filter(|id| *id != requester_id)
            .collect();

        let profiles: HashMap<Uuid, ChatterProfile> = self
            .users
            .find_by_ids(&counterpart_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, ChatterProfile::from(u)))
            .collect();

        let unseen: HashMap<Uuid, i64> = self
            .messages
            .unseen_counts_by_sender(requester_id, &counterpart_ids)
            .await?
            .into_iter()
            .collect();

        Ok(assemble_chatters(
            requester_id,
            &conversations,
            &profiles,
            &unseen,
        ))
    }
}

/// Builds directory entries in conversation order. A counterpart whose
/// profile did not resolve is kept with a null profile; a counterpart equal
/// to the requester is dropped outright.
fn assemble_chatters(
    requester_id: Uuid,
    conversations: &[Conversation],
    profiles: &HashMap<Uuid, ChatterProfile>,
    unseen: &HashMap<Uuid, i64>,
) -> Vec<ChatterResponse> {
    conversations
        .iter()
        .filter_map(|conversation| {
            let counterpart_id = conversation.counterpart_of(requester_id);
            if counterpart_id == requester_id {
                return None;
            }

            Some(ChatterResponse {
                counterpart_id,
                profile: profiles.get(&counterpart_id).cloned(),
                unseen_count: unseen.get(&counterpart_id).copied().unwrap_or(0),
                last_activity_at: conversation.updated_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::conversation_models::pair_key;
    use chrono::Utc;

    fn conversation_between(a: Uuid, b: Uuid) -> Conversation {
        let (low, high) = pair_key(a, b);
        Conversation {
            id: Uuid::new_v4(),
            user_low: low,
            user_high: high,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn profile_for(id: Uuid) -> ChatterProfile {
        ChatterProfile {
            id,
            username: "someone".to_string(),
            fullname: "Some One".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn unseen_count_defaults_to_zero() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let conversations = vec![conversation_between(me, other)];
        let profiles = HashMap::from([(other, profile_for(other))]);
        let unseen = HashMap::new();

        let chatters = assemble_chatters(me, &conversations, &profiles, &unseen);

        assert_eq!(chatters.len(), 1);
        assert_eq!(chatters[0].unseen_count, 0);
    }

    #[test]
    fn missing_profile_keeps_the_entry() {
        let me = Uuid::new_v4();
        let deleted_account = Uuid::new_v4();
        let conversations = vec![conversation_between(me, deleted_account)];
        let unseen = HashMap::from([(deleted_account, 3)]);

        let chatters = assemble_chatters(me, &conversations, &HashMap::new(), &unseen);

        assert_eq!(chatters.len(), 1);
        assert!(chatters[0].profile.is_none());
        assert_eq!(chatters[0].unseen_count, 3);
    }

    #[test]
    fn requester_never_appears_as_counterpart() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let conversations = vec![conversation_between(me, other)];
        let profiles = HashMap::from([(other, profile_for(other)), (me, profile_for(me))]);

        let chatters = assemble_chatters(me, &conversations, &profiles, &HashMap::new());

        assert!(chatters.iter().all(|c| c.counterpart_id != me));
    }

    #[test]
    fn entries_follow_conversation_order() {
        let me = Uuid::new_v4();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let conversations = vec![
            conversation_between(me, first),
            conversation_between(me, second),
        ];

        let chatters = assemble_chatters(me, &conversations, &HashMap::new(), &HashMap::new());

        assert_eq!(chatters[0].counterpart_id, first);
        assert_eq!(chatters[1].counterpart_id, second);
    }
}
