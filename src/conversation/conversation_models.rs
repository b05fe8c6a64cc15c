use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A conversation between exactly two users. The participants are stored as
/// a canonicalized pair (`user_low < user_high`) so the unordered pair
/// {A, B} always maps to the same row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    pub user_low: Uuid,
    pub user_high: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// The other participant from `user_id`'s perspective.
    pub fn counterpart_of(&self, user_id: Uuid) -> Uuid {
        if self.user_low == user_id {
            self.user_high
        } else {
            self.user_low
        }
    }
}

/// Orders a pair of user ids into the canonical (low, high) form used by the
/// conversations table.
pub fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(low: Uuid, high: Uuid) -> Conversation {
        Conversation {
            id: Uuid::new_v4(),
            user_low: low,
            user_high: high,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn pair_key_ignores_argument_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(pair_key(a, b), pair_key(b, a));
    }

    #[test]
    fn pair_key_orders_low_first() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let (low, high) = pair_key(a, b);
        assert!(low < high);
    }

    #[test]
    fn counterpart_is_never_self() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let (low, high) = pair_key(a, b);
        let conv = conversation(low, high);

        assert_eq!(conv.counterpart_of(a), b);
        assert_eq!(conv.counterpart_of(b), a);
        assert_ne!(conv.counterpart_of(a), a);
        assert_ne!(conv.counterpart_of(b), b);
    }
}
