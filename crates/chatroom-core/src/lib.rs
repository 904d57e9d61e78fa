//! # chatroom-core
//!
//! Domain layer containing entities, value objects, and store traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Message, NewMessage, Participant, ARRIVAL_TEXT, DEPARTURE_TEXT};
pub use error::DomainError;
pub use traits::{MessageRepository, ParticipantRepository, RepoResult, StoreHealth};
pub use value_objects::{
    MessageKind, MessageKindParseError, ParticipantName, ParticipantNameError, BROADCAST_RECIPIENT,
};
