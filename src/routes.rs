use crate::{
    auth::{
        auth_dto::{AuthResponse, LoginRequest, RegisterRequest},
        auth_handlers,
    },
    message::{
        message_dto::{
            AttachmentUpload, BulkDeleteRequest, BulkDeleteResponse, ClearConversationResponse,
            SendMessageRequest,
        },
        message_handlers,
        message_models::{Message, MessageResponse},
    },
    middleware::auth_middleware,
    state::AppState,
    user::{
        user_dto::ChatterResponse,
        user_handlers,
        user_models::{ChatterProfile, User, UserResponse},
    },
};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::auth::auth_handlers::register,
        crate::auth::auth_handlers::login,
        crate::auth::auth_handlers::logout,
        crate::message::message_handlers::send_message,
        crate::message::message_handlers::get_conversation,
        crate::message::message_handlers::clear_conversation,
        crate::message::message_handlers::delete_selected,
        crate::user::user_handlers::search_users,
        crate::user::user_handlers::current_chatters,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            SendMessageRequest,
            AttachmentUpload,
            BulkDeleteRequest,
            BulkDeleteResponse,
            ClearConversationResponse,
            Message,
            MessageResponse,
            User,
            UserResponse,
            ChatterProfile,
            ChatterResponse,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "messages", description = "Direct messaging endpoints"),
        (name = "users", description = "User search and chatter directory endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

async fn health() -> &'static str {
    "Server is Working..."
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([state
            .config
            .client_origin
            .parse()
            .expect("CLIENT_ORIGIN must be a valid origin")]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    // Public routes (no auth required)
    let auth_routes = Router::new()
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login))
        .route("/logout", post(auth_handlers::logout));

    // Protected routes (auth required)
    let message_routes = Router::new()
        .route("/send/:receiver_id", post(message_handlers::send_message))
        .route("/:counterpart_id", get(message_handlers::get_conversation))
        .route(
            "/clear/:counterpart_id",
            delete(message_handlers::clear_conversation),
        )
        .route("/bulk", delete(message_handlers::delete_selected))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let user_routes = Router::new()
        .route("/search", get(user_handlers::search_users))
        .route("/chatters", get(user_handlers::current_chatters))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health))
        .nest("/api/auth", auth_routes)
        .nest("/api/messages", message_routes)
        .nest("/api/users", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
