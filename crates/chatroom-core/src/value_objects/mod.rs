//! Value objects - immutable types that represent domain concepts

mod message_kind;
mod participant_name;

pub use message_kind::{MessageKind, MessageKindParseError};
pub use participant_name::{ParticipantName, ParticipantNameError};

/// Recipient name that addresses a message to everyone in the room
pub const BROADCAST_RECIPIENT: &str = "Todos";
