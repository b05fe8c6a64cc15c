use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    message::{
        message_dto::{
            BulkDeleteRequest, BulkDeleteResponse, ClearConversationResponse, SendMessageRequest,
        },
        message_models::MessageResponse,
    },
    middleware::AuthUser,
    state::AppState,
};

/// Send a message to another user
#[utoipa::path(
    post,
    path = "/api/messages/send/{receiver_id}",
    tag = "messages",
    params(
        ("receiver_id" = Uuid, Path, description = "User to send the message to")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent successfully", body = MessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Receiver not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(receiver_id): Path<Uuid>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let _receiver = state
        .user_repository
        .find_by_id(receiver_id)
        .await?
        .ok_or(AppError::NotFound("Receiver not found".to_string()))?;

    let message = state
        .message_service
        .send_message(user_id, receiver_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Get the conversation with a specific user
#[utoipa::path(
    get,
    path = "/api/messages/{counterpart_id}",
    tag = "messages",
    params(
        ("counterpart_id" = Uuid, Path, description = "Other user in the conversation")
    ),
    responses(
        (status = 200, description = "Messages in creation order, empty if the pair never talked", body = Vec<MessageResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(counterpart_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state
        .message_service
        .get_conversation(user_id, counterpart_id)
        .await?;

    let responses: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();

    Ok((StatusCode::OK, Json(responses)))
}

/// Delete the entire conversation with a specific user
#[utoipa::path(
    delete,
    path = "/api/messages/clear/{counterpart_id}",
    tag = "messages",
    params(
        ("counterpart_id" = Uuid, Path, description = "Other user in the conversation")
    ),
    responses(
        (status = 200, description = "Conversation deleted, or nothing to delete", body = ClearConversationResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn clear_conversation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(counterpart_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state
        .message_service
        .clear_conversation(user_id, counterpart_id)
        .await?;

    let message = if deleted {
        "Conversation deleted successfully"
    } else {
        "No conversation to delete"
    };

    Ok((
        StatusCode::OK,
        Json(ClearConversationResponse {
            success: true,
            message: message.to_string(),
            deleted,
        }),
    ))
}

/// Delete selected messages sent by the authenticated user
#[utoipa::path(
    delete,
    path = "/api/messages/bulk",
    tag = "messages",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Owned subset deleted", body = BulkDeleteResponse),
        (status = 400, description = "Empty id list"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_selected(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let deleted_count = state
        .message_service
        .delete_selected(user_id, &payload.message_ids)
        .await?;

    let message = if deleted_count == 0 {
        "No messages deleted (not owned by user)"
    } else {
        "Selected messages deleted"
    };

    Ok((
        StatusCode::OK,
        Json(BulkDeleteResponse {
            success: true,
            message: message.to_string(),
            deleted_count,
        }),
    ))
}
