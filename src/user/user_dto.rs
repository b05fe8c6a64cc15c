use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user_models::ChatterProfile;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// One entry of the chatter directory: a counterpart the user has a
/// conversation with, most recently active first. `profile` is null when the
/// counterpart account no longer resolves; the entry is kept anyway.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatterResponse {
    pub counterpart_id: Uuid,
    pub profile: Option<ChatterProfile>,
    pub unseen_count: i64,
    pub last_activity_at: DateTime<Utc>,
}
