//! Message entity <-> model mapper

use chatroom_core::{DomainError, Message, MessageKind};

use crate::models::MessageModel;

impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<MessageKind>()
            .map_err(|e| DomainError::InternalError(format!("message {}: {e}", model.id)))?;

        Ok(Message {
            id: model.id,
            from: model.from_name,
            to: model.to_name,
            text: model.text,
            kind,
            created_at: model.created_at,
        })
    }
}
