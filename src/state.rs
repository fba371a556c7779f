use crate::db::DbPool;

use crate::message::{message_repository::MessageRepository, message_service::MessageService};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub message_repository: MessageRepository,
    pub message_service: MessageService,
}
