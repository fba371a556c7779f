use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::Result, message::message_models::Message};

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        room: &str,
        sender: &str,
        content: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"INSERT INTO messages (room, sender, content, "timestamp")
             VALUES ($1, $2, $3, $4)
             RETURNING *"#,
        )
        .bind(room)
        .bind(sender)
        .bind(content)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Messages in a room, ascending by timestamp with the insertion sequence
    /// as tie-break. `since` bounds the result to strictly newer messages.
    pub async fn find_by_room(
        &self,
        room: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"SELECT * FROM messages
             WHERE room = $1
               AND ($2::timestamptz IS NULL OR "timestamp" > $2)
             ORDER BY "timestamp" ASC, seq ASC"#,
        )
        .bind(room)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
