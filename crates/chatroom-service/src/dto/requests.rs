//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! String fields are trimmed while deserializing, so length checks apply to
//! the value that gets stored.

use std::borrow::Cow;

use chatroom_core::MessageKind;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Only participant-postable kinds are accepted
fn validate_message_type(kind: &str) -> Result<(), ValidationError> {
    match kind.parse::<MessageKind>() {
        Ok(kind) if kind.is_user_postable() => Ok(()),
        _ => Err(ValidationError::new("message_type").with_message(Cow::Borrowed(
            "type must be message or private_message",
        ))),
    }
}

// ============================================================================
// Participant Requests
// ============================================================================

/// Join the room
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 64, message = "name must be 1-64 characters"))]
    pub name: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Post a message to the room
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 64, message = "to must be 1-64 characters"))]
    pub to: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 2000, message = "text must be 1-2000 characters"))]
    pub text: String,

    /// `message` or `private_message`
    #[serde(rename = "type", deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_message_type"))]
    pub kind: String,
}

impl CreateMessageRequest {
    pub fn new(to: impl Into<String>, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            kind: kind.as_str().to_string(),
        }
    }
}
