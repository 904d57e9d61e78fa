//! Store traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Each method is a single store operation;
//! callers get no atomicity across calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Message, NewMessage, Participant};
use crate::error::DomainError;
use crate::value_objects::ParticipantName;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Participant Store
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// List every participant currently in the room
    async fn find_all(&self) -> RepoResult<Vec<Participant>>;

    /// Find a participant by name
    async fn find_by_name(&self, name: &ParticipantName) -> RepoResult<Option<Participant>>;

    /// Insert a participant.
    ///
    /// Fails with `DomainError::ParticipantNameTaken` if the name is already
    /// present; this check is atomic with the insert.
    async fn create(&self, participant: &Participant) -> RepoResult<()>;

    /// Set `last_active` for an existing participant.
    ///
    /// Returns `false` (and writes nothing) if no participant has this name.
    async fn touch(&self, name: &ParticipantName, at: DateTime<Utc>) -> RepoResult<bool>;

    /// Remove a participant only if its `last_active` still equals
    /// `last_active`.
    ///
    /// Returns `false` if the participant is gone or was touched or
    /// re-registered since it was read; nothing is removed in that case.
    async fn delete_if_inactive(
        &self,
        name: &ParticipantName,
        last_active: DateTime<Utc>,
    ) -> RepoResult<bool>;
}

// ============================================================================
// Message Store
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to the log and return it with its assigned id
    async fn append(&self, message: NewMessage) -> RepoResult<Message>;

    /// Messages `user` may read, newest first, at most `limit` when given
    async fn find_visible_to(&self, user: &str, limit: Option<i64>) -> RepoResult<Vec<Message>>;
}

// ============================================================================
// Store health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
