//! Service context - dependency container for services
//!
//! Holds the store handles and presence settings needed by services.

use std::sync::Arc;

use chatroom_common::PresenceConfig;
use chatroom_core::traits::{MessageRepository, ParticipantRepository, StoreHealth};
use chatroom_db::{MemoryStore, PgMessageRepository, PgParticipantRepository, PgPool, PgStoreHealth};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Participant and message stores
/// - Store health probe
/// - Presence sweeper settings
#[derive(Clone)]
pub struct ServiceContext {
    // Stores
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Settings
    presence: PresenceConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
        store_health: Arc<dyn StoreHealth>,
        presence: PresenceConfig,
    ) -> Self {
        Self {
            participant_repo,
            message_repo,
            store_health,
            presence,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, presence: PresenceConfig) -> Self {
        Self::new(
            Arc::new(PgParticipantRepository::new(pool.clone())),
            Arc::new(PgMessageRepository::new(pool.clone())),
            Arc::new(PgStoreHealth::new(pool)),
            presence,
        )
    }

    /// Context backed by a single in-memory store
    pub fn in_memory(store: Arc<MemoryStore>, presence: PresenceConfig) -> Self {
        Self::new(store.clone(), store.clone(), store, presence)
    }

    // === Stores ===

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Settings ===

    /// Get the presence settings
    pub fn presence(&self) -> &PresenceConfig {
        &self.presence
    }

    /// Inactivity after which a participant is evicted
    pub fn inactivity_timeout(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.presence.inactivity_timeout())
            .unwrap_or(chrono::Duration::MAX)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("presence", &self.presence)
            .finish()
    }
}
