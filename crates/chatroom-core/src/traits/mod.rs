//! Store traits (ports)

mod repositories;

pub use repositories::{MessageRepository, ParticipantRepository, RepoResult, StoreHealth};
