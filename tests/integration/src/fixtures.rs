//! Test fixtures and request/response shapes
//!
//! Mirrors the JSON bodies of the REST API so tests can build requests and
//! decode responses without depending on the server's own DTOs.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Participants
// ============================================================================

/// Registration body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
}

impl RegisterRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn unique() -> Self {
        Self {
            name: format!("guest{}", unique_suffix()),
        }
    }
}

/// Participant as listed by the server
#[derive(Debug, Deserialize)]
pub struct ParticipantResponse {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

// ============================================================================
// Messages
// ============================================================================

/// Message body
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PostMessageRequest {
    pub fn public(text: &str) -> Self {
        Self {
            to: "Todos".to_string(),
            text: text.to_string(),
            kind: "message".to_string(),
        }
    }

    pub fn private(to: &str, text: &str) -> Self {
        Self {
            to: to.to_string(),
            text: text.to_string(),
            kind: "private_message".to_string(),
        }
    }

    pub fn with_kind(kind: &str) -> Self {
        Self {
            to: "Todos".to_string(),
            text: "hello".to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Message as returned by the server
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}
