//! Message service
//!
//! Handles posting messages and listing the messages a participant may read.

use chatroom_core::{DomainError, MessageKind, NewMessage, ParticipantName};
use chrono::Utc;
use tracing::{debug, instrument};

use crate::dto::{CreateMessageRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message from `sender`
    ///
    /// The sender must be a registered participant and the kind must be one
    /// participants may send. Nothing is appended when a check fails.
    #[instrument(skip(self, request))]
    pub async fn post(
        &self,
        sender: &str,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let kind = request
            .kind
            .parse::<MessageKind>()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        if !kind.is_user_postable() {
            return Err(DomainError::MessageKindNotAllowed(kind.to_string()).into());
        }

        let to = request.to.trim();
        let text = request.text.trim();
        if to.is_empty() || text.is_empty() {
            return Err(ServiceError::validation("to and text must not be empty"));
        }

        let from = ParticipantName::parse(sender)
            .map_err(|_| DomainError::SenderNotRegistered(sender.to_string()))?;
        if self.ctx.participant_repo().find_by_name(&from).await?.is_none() {
            return Err(DomainError::SenderNotRegistered(from.into_inner()).into());
        }

        let message = self
            .ctx
            .message_repo()
            .append(NewMessage::new(&from, to, text, kind, Utc::now()))
            .await?;

        debug!(
            id = message.id,
            from = %message.from,
            to = %message.to,
            kind = %message.kind,
            "Message posted"
        );

        Ok(MessageResponse::from(message))
    }

    /// Messages visible to `user`, newest first
    ///
    /// `limit`, when given, must be positive.
    #[instrument(skip(self))]
    pub async fn list(&self, user: &str, limit: Option<i64>) -> ServiceResult<Vec<MessageResponse>> {
        if limit.is_some_and(|l| l <= 0) {
            return Err(ServiceError::validation("limit must be a positive integer"));
        }

        let messages = self.ctx.message_repo().find_visible_to(user, limit).await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }
}
