//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chatroom_core::{Message, MessageKind, MessageRepository, NewMessage, RepoResult};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(from = %message.from, kind = %message.kind))]
    async fn append(&self, message: NewMessage) -> RepoResult<Message> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (from_name, to_name, text, kind, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from_new(id, message))
    }

    #[instrument(skip(self))]
    async fn find_visible_to(&self, user: &str, limit: Option<i64>) -> RepoResult<Vec<Message>> {
        // LIMIT NULL means no limit in PostgreSQL
        let rows = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, from_name, to_name, text, kind, created_at
            FROM messages
            WHERE kind <> $1 OR from_name = $2 OR to_name = $2
            ORDER BY id DESC
            LIMIT $3
            "#,
        )
        .bind(MessageKind::PrivateMessage.as_str())
        .bind(user)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Message::try_from).collect()
    }
}
