//! # chatroom-db
//!
//! Store layer implementing the `chatroom-core` repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, migrations, row models, mappers and
//!   repositories
//! - [`MemoryStore`]: a process-local store with the same semantics, used by
//!   tests and by `STORE_BACKEND=memory`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatroom_db::{create_pool, run_migrations, PgParticipantRepository, PoolConfig};
//!
//! async fn example(config: &chatroom_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(config)).await?;
//!     run_migrations(&pool, &config.migrations_dir).await?;
//!     let participants = PgParticipantRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgMessageRepository, PgParticipantRepository, PgStoreHealth};
