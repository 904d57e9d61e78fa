//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chatroom_core::{Message, Participant};

use super::responses::{MessageResponse, ParticipantResponse};

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.to_string(),
            last_status: participant.last_active.timestamp_millis(),
        }
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self::from(&participant)
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            from: message.from.clone(),
            to: message.to.clone(),
            text: message.text.clone(),
            kind: message.kind,
            time: message.time(),
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            time: message.time(),
            from: message.from,
            to: message.to,
            text: message.text,
            kind: message.kind,
        }
    }
}
