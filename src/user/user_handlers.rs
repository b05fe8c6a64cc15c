use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Result,
    middleware::AuthUser,
    state::AppState,
    user::{
        user_dto::{ChatterResponse, SearchQuery},
        user_models::UserResponse,
    },
};

/// Search users by username or full name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "users",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring to match")
    ),
    responses(
        (status = 200, description = "Matching users, requester excluded", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let search = query.search.unwrap_or_default();

    let users = state.user_service.search_users(user_id, &search).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List everyone the authenticated user is currently chatting with
#[utoipa::path(
    get,
    path = "/api/users/chatters",
    tag = "users",
    responses(
        (status = 200, description = "Chatter directory, most recently active first", body = Vec<ChatterResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn current_chatters(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let chatters = state.user_service.current_chatters(user_id).await?;

    Ok((StatusCode::OK, Json(chatters)))
}
