use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{AppError, Result};
use crate::message::message_dto::SendMessageRequest;
use crate::message::message_models::Message;
use crate::message::message_repository::MessageRepository;

/// Service layer for the message writer and reader operations.
#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    /// Writer: timestamps the message server-side and persists it. Duplicate
    /// submissions create duplicate records; there is no idempotency key.
    pub async fn post_message(&self, payload: SendMessageRequest) -> Result<Message> {
        let timestamp = Utc::now();
        let message = self
            .repo
            .create(&payload.room, &payload.sender, &payload.content, timestamp)
            .await?;

        tracing::debug!(
            "Stored message {} in room '{}' from '{}'",
            message.id,
            message.room,
            message.sender
        );

        Ok(message)
    }

    /// Reader: validates the `since` cursor before touching the store, then
    /// returns the room's messages strictly newer than the cursor, ascending.
    pub async fn list_messages(&self, room: &str, since: Option<&str>) -> Result<Vec<Message>> {
        let since = since.map(parse_since).transpose()?;
        self.repo.find_by_room(room, since).await
    }
}

/// Parses a polling cursor. Accepts RFC 3339 (with `Z` or a numeric offset)
/// and, failing that, a naive ISO-8601 date-time taken as UTC.
pub(crate) fn parse_since(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::BadRequest("Invalid 'since' timestamp".to_string()))
}
