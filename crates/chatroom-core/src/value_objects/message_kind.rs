//! Message kind

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a chat message
///
/// `Message` and `PrivateMessage` are sent by participants. `Status` is
/// produced by the system when a participant leaves the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

impl MessageKind {
    /// Wire/storage representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// Whether a participant may post a message of this kind
    #[inline]
    pub const fn is_user_postable(self) -> bool {
        matches!(self, Self::Message | Self::PrivateMessage)
    }

    #[inline]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::PrivateMessage)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = MessageKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            "status" => Ok(Self::Status),
            other => Err(MessageKindParseError(other.to_string())),
        }
    }
}

/// Error when parsing a message kind from its string form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type: {0}")]
pub struct MessageKindParseError(pub String);
