use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::message::message_models::MessageResponse;

/// Body of `POST /api/messages`. The timestamp is never part of this payload;
/// it is assigned by the writer at persist time.
#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "room must not be empty"))]
    pub room: String,
    pub sender: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendMessageResponse {
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessagesResponse {
    pub messages: Vec<MessageResponse>,
}
