//! Application error types
//!
//! Startup errors for the server binary, and the HTTP status mapping shared
//! by every layer that reports a `DomainError`.

use chatroom_core::DomainError;

/// Errors raised while starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Store errors
    #[error("Database error: {0}")]
    Database(String),

    // Configuration and startup errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() {
        422
    } else if err.is_conflict() {
        409
    } else {
        500
    }
}
