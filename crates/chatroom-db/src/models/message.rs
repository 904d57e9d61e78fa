//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub from_name: String,
    pub to_name: String,
    pub text: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
