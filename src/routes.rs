use crate::{
    health::{self, HealthResponse},
    message::{
        message_dto::{MessagesResponse, SendMessageRequest, SendMessageResponse},
        message_handlers,
        message_models::{Message, MessageResponse},
    },
    state::AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::root,
        crate::health::db_check,
        crate::message::message_handlers::send_message,
        crate::message::message_handlers::get_messages,
    ),
    components(
        schemas(
            SendMessageRequest,
            SendMessageResponse,
            MessagesResponse,
            Message,
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and store diagnostics"),
        (name = "messages", description = "Room message posting and polling")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    // Wildcard origins cannot be combined with credentials, so credentials stay off.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let message_routes = Router::new().route(
        "/",
        post(message_handlers::send_message).get(message_handlers::get_messages),
    );

    let api_routes = Router::new().nest("/messages", message_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health::root))
        .route("/test", get(health::db_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
