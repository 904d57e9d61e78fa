//! Process-local store
//!
//! Implements the same contracts as the PostgreSQL repositories: every call
//! is atomic on its own, nothing is atomic across calls.

mod store;

pub use store::MemoryStore;
