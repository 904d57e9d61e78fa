//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Sender is not in the room: {0}")]
    SenderNotRegistered(String),

    #[error("Message type cannot be sent by participants: {0}")]
    MessageKindNotAllowed(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Name already in use: {0}")]
    ParticipantNameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::SenderNotRegistered(_) => "SENDER_NOT_REGISTERED",
            Self::MessageKindNotAllowed(_) => "INVALID_MESSAGE_TYPE",
            Self::ParticipantNameTaken(_) => "NAME_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ParticipantNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::SenderNotRegistered(_) | Self::MessageKindNotAllowed(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ParticipantNameTaken(_))
    }
}
