//! Message entity - an immutable entry of the room's message log

use chrono::{DateTime, Utc};

use crate::value_objects::{MessageKind, ParticipantName, BROADCAST_RECIPIENT};

/// Text of the notice appended when a participant registers
pub const ARRIVAL_TEXT: &str = "entra na sala...";

/// Text of the notice appended when a participant is evicted
pub const DEPARTURE_TEXT: &str = "sai da sala...";

/// Format used to render a message's time of day
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Stored message. `id` is assigned by the store and grows with insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a stored message from an appended one
    pub fn from_new(id: i64, new: NewMessage) -> Self {
        Self {
            id,
            from: new.from,
            to: new.to,
            text: new.text,
            kind: new.kind,
            created_at: new.created_at,
        }
    }

    /// Whether `user` may read this message.
    ///
    /// Private messages are only visible to their sender and recipient,
    /// everything else is public.
    pub fn is_visible_to(&self, user: &str) -> bool {
        !self.kind.is_private() || self.from == user || self.to == user
    }

    /// Time of day the message was created, as `HH:MM:SS`
    pub fn time(&self) -> String {
        self.created_at.format(TIME_FORMAT).to_string()
    }
}

/// A message that has not been appended to the log yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Create a message sent by a participant
    pub fn new(
        from: &ParticipantName,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            from: from.to_string(),
            to: to.into(),
            text: text.into(),
            kind,
            created_at,
        }
    }

    /// Broadcast notice recording that `name` entered the room
    pub fn arrival(name: &ParticipantName, at: DateTime<Utc>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, ARRIVAL_TEXT, MessageKind::Message, at)
    }

    /// Broadcast status recording that `name` left the room
    pub fn departure(name: &ParticipantName, at: DateTime<Utc>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, DEPARTURE_TEXT, MessageKind::Status, at)
    }
}
