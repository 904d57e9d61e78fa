//! Axum extractors for request handling
//!
//! Custom extractors for the `user` header, validation, and the message limit.

mod limit;
mod user;
mod validated;

pub use limit::{MessageLimit, MessageLimitParams};
pub use user::{RequiredUser, UserHeader, USER_HEADER};
pub use validated::ValidatedJson;
