use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted chat message. Immutable once written; `seq` is the insertion
/// sequence used as the tie-break when two messages share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub seq: i64,
    pub room: String,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Wire shape of a message: the store id surfaced as a plain string, the
/// timestamp rendered as an ISO-8601 string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: String,
    pub room: String,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            room: message.room,
            sender: message.sender,
            content: message.content,
            timestamp: message.timestamp.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_message() -> Message {
        Message {
            id: Uuid::nil(),
            seq: 1,
            room: "general".to_string(),
            sender: "alice".to_string(),
            content: "hi".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_response_renders_id_and_timestamp_as_strings() {
        let response = MessageResponse::from(sample_message());

        assert_eq!(response.id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(response.timestamp, "2024-05-01T12:30:00+00:00");
        assert_eq!(response.room, "general");
        assert_eq!(response.sender, "alice");
        assert_eq!(response.content, "hi");
    }

    #[test]
    fn test_response_json_shape() {
        let response = MessageResponse::from(sample_message());
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["content", "id", "room", "sender", "timestamp"]);
        assert!(object["timestamp"].is_string());
        assert!(object["id"].is_string());
    }
}
