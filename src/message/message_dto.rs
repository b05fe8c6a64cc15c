use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Payload for sending a message. The attachment triple is produced by the
/// upload handler in front of this API; the backend only stores it.
#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub text: Option<String>,
    #[validate(nested)]
    pub attachment: Option<AttachmentUpload>,
}

#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct AttachmentUpload {
    #[validate(length(min = 1))]
    pub file_url: String,
    #[validate(length(min = 1))]
    pub file_type: String,
    #[validate(length(min = 1))]
    pub file_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BulkDeleteRequest {
    #[validate(length(min = 1, message = "messageIds array is required"))]
    pub message_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClearConversationResponse {
    pub success: bool,
    pub message: String,
    pub deleted: bool,
}
