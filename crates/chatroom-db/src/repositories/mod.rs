//! Repository implementations
//!
//! PostgreSQL implementations of the store traits defined in chatroom-core.

mod error;
mod health;
mod message;
mod participant;

pub use health::PgStoreHealth;
pub use message::PgMessageRepository;
pub use participant::PgParticipantRepository;
