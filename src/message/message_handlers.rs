use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::Result,
    message::{
        message_dto::{MessagesResponse, SendMessageRequest, SendMessageResponse},
        message_models::MessageResponse,
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    room: Option<String>,
    since: Option<String>,
}

/// Post a message to a room
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = SendMessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = state.message_service.post_message(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            id: message.id.to_string(),
        }),
    ))
}

/// Poll a room for messages, optionally only those newer than `since`
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    params(
        ("room" = Option<String>, Query, description = "Room to read (default: general)"),
        ("since" = Option<String>, Query, description = "ISO timestamp to fetch messages after")
    ),
    responses(
        (status = 200, description = "Messages ascending by timestamp", body = MessagesResponse),
        (status = 400, description = "Malformed 'since' timestamp"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse> {
    let room = query.room.unwrap_or_else(|| "general".to_string());

    let messages = state
        .message_service
        .list_messages(&room, query.since.as_deref())
        .await?;

    let messages: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();

    Ok((StatusCode::OK, Json(MessagesResponse { messages })))
}
